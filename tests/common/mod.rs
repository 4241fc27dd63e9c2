//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use chrono::NaiveDate;
use habit_tracker::habits::{parse_date, Habit};
use ratatui::buffer::Buffer;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn day(value: &str) -> NaiveDate {
    parse_date(value).expect("valid test date")
}

/// Habit with a fixed id and the given completion days.
pub fn habit(id: &str, name: &str, dates: &[&str]) -> Habit {
    Habit::with_id(id.into(), name, "daily").with_completions(dates.iter().map(|d| day(d)))
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Rendered buffer as text, one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}
