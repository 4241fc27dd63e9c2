use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habits::HabitError;

/// Calendar day format used everywhere a date is written as text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar day.
///
/// Malformed input is rejected rather than normalized: chrono alone would
/// accept unpadded fields, a leading `+` and stray whitespace, so the
/// parsed day must format back to exactly `value`.
pub fn parse_date(value: &str) -> Result<NaiveDate, HabitError> {
    let invalid = || HabitError::InvalidDate {
        value: value.to_string(),
    };
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())?;
    if date.format(DATE_FORMAT).to_string() != value {
        return Err(invalid());
    }
    Ok(date)
}

/// Serde adapter applying [`parse_date`] to a list of days.
pub(crate) fn deserialize_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|value| parse_date(value).map_err(serde::de::Error::custom))
        .collect()
}

/// Stable identifier of a habit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for habits created without one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HabitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for HabitId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A tracked recurring activity and the days it was completed.
///
/// The id is fixed at construction. Completion days only change through
/// the store's reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    name: String,
    frequency: String,
    complete_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    /// New habit with a generated id and no completions.
    pub fn new(name: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self::with_id(HabitId::generate(), name, frequency)
    }

    pub fn with_id(id: HabitId, name: impl Into<String>, frequency: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            frequency: frequency.into(),
            complete_dates: BTreeSet::new(),
        }
    }

    /// Builder used when seeding history. Repeated days collapse.
    pub fn with_completions(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.complete_dates.extend(dates);
        self
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn complete_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.complete_dates
    }

    pub fn is_complete_on(&self, date: NaiveDate) -> bool {
        self.complete_dates.contains(&date)
    }

    /// Flip completion for `date`. Returns whether the day is now complete.
    pub(crate) fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.complete_dates.remove(&date) {
            false
        } else {
            self.complete_dates.insert(date);
            true
        }
    }
}
