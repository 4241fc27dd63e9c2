use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habits::{deserialize_dates, DateConvention, Habit, HabitId};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    /// Habits loaded into the store at startup.
    #[serde(default)]
    pub habits: Vec<HabitConfig>,
}

/// Default settings for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Calendar used to decide what "today" is (default: utc).
    #[serde(default)]
    pub date_convention: DateConvention,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Seed entry for one habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitConfig {
    /// Explicit id. A random one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    /// Days already completed, as `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "deserialize_dates")]
    pub complete_dates: Vec<NaiveDate>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_frequency() -> String {
    "daily".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            date_convention: DateConvention::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl HabitConfig {
    pub fn to_habit(&self) -> Habit {
        let id = match &self.id {
            Some(id) => HabitId::new(id.clone()),
            None => HabitId::generate(),
        };
        Habit::with_id(id, self.name.clone(), self.frequency.clone())
            .with_completions(self.complete_dates.iter().copied())
    }
}

impl Config {
    /// Habits in file order, ready for the store.
    pub fn initial_habits(&self) -> Vec<Habit> {
        self.habits.iter().map(HabitConfig::to_habit).collect()
    }
}
