//! Habit records, calendar conventions and the streak calculator.

mod clock;
mod error;
pub mod streak;
mod summary;
mod types;

pub use clock::{Clock, DateConvention, FixedClock, SystemClock};
pub use error::HabitError;
pub use streak::current_streak;
pub use summary::HabitSummary;
pub use types::{parse_date, Habit, HabitId, DATE_FORMAT};
pub(crate) use types::deserialize_dates;
