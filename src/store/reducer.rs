use std::sync::Arc;

use crate::mvi::Reducer;
use crate::store::intent::HabitIntent;
use crate::store::state::HabitsState;

pub struct HabitsReducer;

impl Reducer for HabitsReducer {
    type State = HabitsState;
    type Intent = HabitIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HabitIntent::Toggle { id, date } => {
                if let Some(slot) = state.habits.iter_mut().find(|habit| habit.id() == &id) {
                    // Clones the habit only while an older snapshot still shares it.
                    Arc::make_mut(slot).toggle(date);
                }
                state
            }
            HabitIntent::Remove { id } => {
                state.habits.retain(|habit| habit.id() != &id);
                state
            }
            HabitIntent::Add { habit } => {
                if !state.contains(habit.id()) {
                    state.habits.push(Arc::new(habit));
                }
                state
            }
        }
    }
}
