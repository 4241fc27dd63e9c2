use thiserror::Error;

use crate::habits::HabitId;

/// Errors raised when building habit data from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Duplicate habit id '{id}'")]
    DuplicateId { id: HabitId },
}
