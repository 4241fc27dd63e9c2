use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Which calendar "today" is read from.
///
/// Stored completion days are plain calendar dates; the convention only
/// decides how the current instant maps to one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DateConvention {
    #[default]
    Utc,
    Local,
}

impl DateConvention {
    pub fn label(self) -> &'static str {
        match self {
            DateConvention::Utc => "UTC",
            DateConvention::Local => "local",
        }
    }
}

/// Source of the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock read under a fixed convention.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    convention: DateConvention,
}

impl SystemClock {
    pub fn new(convention: DateConvention) -> Self {
        Self { convention }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        match self.convention {
            DateConvention::Utc => Utc::now().date_naive(),
            DateConvention::Local => Local::now().date_naive(),
        }
    }
}

/// Clock pinned to one day (`--today`, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
