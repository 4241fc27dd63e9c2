use chrono::NaiveDate;
use serde::Serialize;

use crate::habits::{current_streak, Habit, HabitId};

/// Per-habit values derived for display on a given day.
///
/// Built fresh from a snapshot each time it is needed; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitSummary {
    pub id: HabitId,
    pub name: String,
    pub frequency: String,
    pub completed_today: bool,
    pub streak: u32,
}

impl HabitSummary {
    pub fn of(habit: &Habit, today: NaiveDate) -> Self {
        Self {
            id: habit.id().clone(),
            name: habit.name().to_string(),
            frequency: habit.frequency().to_string(),
            completed_today: habit.is_complete_on(today),
            streak: current_streak(habit, today),
        }
    }

    pub fn streak_label(&self) -> String {
        match self.streak {
            1 => "Current streak: 1 day".to_string(),
            n => format!("Current streak: {n} days"),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed_today {
            "Completed"
        } else {
            "Mark complete"
        }
    }
}
