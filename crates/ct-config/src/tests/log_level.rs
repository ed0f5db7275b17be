use crate::{LogLevel, LoggingConfig};

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_parses_known_levels() {
    assert_eq!(LogLevel::from_str("debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("WARN").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_log_level_defaults_to_info_for_garbage() {
    assert_eq!(LogLevel::from_str("loud").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_unknown_level_in_toml_falls_back_to_default() {
    let config: LoggingConfig = toml::from_str("level = \"verbose\"").unwrap();
    assert_eq!(config.level.0, LevelFilter::Info);
}

#[test]
fn test_level_in_toml_is_case_insensitive() {
    let config: LoggingConfig = toml::from_str("level = \"Trace\"").unwrap();
    assert_eq!(config.level.0, LevelFilter::Trace);
}
