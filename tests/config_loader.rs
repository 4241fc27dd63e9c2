mod common;

use common::{day, temp_config};
use habit_tracker::config::{Config, ConfigError};
use habit_tracker::habits::DateConvention;
use habit_tracker::store::HabitsState;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.defaults.date_convention, DateConvention::Utc);
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert!(config.habits.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("habit-tracker/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let (dir, _) = temp_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_round_trip_into_habits() {
    let (_dir, path) = temp_config(
        r#"
[defaults]
date_convention = "local"
tick_rate_ms = 500

[[habits]]
id = "read"
name = "Read 20 pages"
complete_dates = ["2024-01-09", "2024-01-10", "2024-01-10"]

[[habits]]
name = "Stretch"
frequency = "weekly"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.date_convention, DateConvention::Local);
    assert_eq!(config.defaults.tick_rate_ms, 500);

    let habits = config.initial_habits();
    assert_eq!(habits.len(), 2);
    assert_eq!(habits[0].id().as_str(), "read");
    assert_eq!(habits[0].frequency(), "daily");
    // Repeated days collapse into one entry.
    assert_eq!(habits[0].complete_dates().len(), 2);
    assert!(habits[0].is_complete_on(day("2024-01-10")));
    assert_eq!(habits[1].frequency(), "weekly");
    assert!(!habits[1].id().as_str().is_empty());

    assert!(HabitsState::new(habits).is_ok());
}

#[test]
fn test_defaults_section_is_optional() {
    let (_dir, path) = temp_config("[[habits]]\nname = \"Walk\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.tick_rate_ms, 250);
    assert_eq!(config.habits.len(), 1);
}

#[test]
fn test_malformed_date_is_parse_error() {
    let (_dir, path) = temp_config(
        "[[habits]]\nname = \"Walk\"\ncomplete_dates = [\"2024-02-30\"]\n",
    );
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_unpadded_date_is_parse_error() {
    let (_dir, path) = temp_config(
        "[[habits]]\nname = \"Walk\"\ncomplete_dates = [\"2024-1-5\"]\n",
    );
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { source, .. }) => {
            assert!(source.to_string().contains("Invalid date '2024-1-5'"));
        }
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_duplicate_ids_fail_validation() {
    let (_dir, path) = temp_config(
        r#"
[[habits]]
id = "x"
name = "One"

[[habits]]
id = "x"
name = "Two"
"#,
    );
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Duplicate habit id 'x'"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_empty_name_fails_validation() {
    let (_dir, path) = temp_config("[[habits]]\nname = \"  \"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = temp_config("[defaults]\ntick_rate_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_unknown_convention_is_parse_error() {
    let (_dir, path) = temp_config("[defaults]\ndate_convention = \"mars\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
