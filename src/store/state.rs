use std::collections::HashSet;
use std::sync::Arc;

use crate::habits::{Habit, HabitError, HabitId};
use crate::mvi::State;

/// The habit collection in insertion order.
///
/// Habits sit behind `Arc` so cloning the state is cheap and a transition
/// only copies the habit it touches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HabitsState {
    pub(crate) habits: Vec<Arc<Habit>>,
}

impl State for HabitsState {}

impl HabitsState {
    /// Build the initial collection. Ids must be unique.
    pub fn new(habits: Vec<Habit>) -> Result<Self, HabitError> {
        let mut seen = HashSet::with_capacity(habits.len());
        for habit in &habits {
            if !seen.insert(habit.id().clone()) {
                return Err(HabitError::DuplicateId {
                    id: habit.id().clone(),
                });
            }
        }
        Ok(Self {
            habits: habits.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn habits(&self) -> impl ExactSizeIterator<Item = &Habit> {
        self.habits.iter().map(Arc::as_ref)
    }

    pub fn get(&self, id: &HabitId) -> Option<&Habit> {
        self.habits().find(|habit| habit.id() == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Habit> {
        self.habits.get(index).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &HabitId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }
}
