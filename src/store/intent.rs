use chrono::NaiveDate;

use crate::habits::{parse_date, Habit, HabitError, HabitId};
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HabitIntent {
    /// Mark `date` complete, or un-mark it if already complete.
    Toggle { id: HabitId, date: NaiveDate },
    /// Delete the habit permanently.
    Remove { id: HabitId },
    /// Append a habit produced by an external creation flow.
    /// Ignored if the id is already taken.
    Add { habit: Habit },
}

impl Intent for HabitIntent {}

impl HabitIntent {
    /// Toggle from a textual `YYYY-MM-DD` day.
    pub fn toggle_on(id: impl Into<HabitId>, date: &str) -> Result<Self, HabitError> {
        Ok(HabitIntent::Toggle {
            id: id.into(),
            date: parse_date(date)?,
        })
    }

    pub fn remove(id: impl Into<HabitId>) -> Self {
        HabitIntent::Remove { id: id.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HabitIntent::Toggle { .. } => "toggle",
            HabitIntent::Remove { .. } => "remove",
            HabitIntent::Add { .. } => "add",
        }
    }
}
