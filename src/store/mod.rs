//! Centralized habit state: intents, the reducer and the observable store.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::HabitIntent;
pub use reducer::HabitsReducer;
pub use state::HabitsState;
pub use store::{HabitStore, Subscription, SubscriptionId};
