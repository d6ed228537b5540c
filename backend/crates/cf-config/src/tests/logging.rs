use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_level_names_when_parsed_then_case_insensitive() {
    assert_that!(*LogLevel::from_str("WARN").unwrap(), eq(LevelFilter::Warn));
    assert_that!(*LogLevel::from_str(" trace ").unwrap(), eq(LevelFilter::Trace));
    assert_that!(*LogLevel::from_str("off").unwrap(), eq(LevelFilter::Off));
}

#[test]
fn given_unknown_level_when_parsed_then_defaults_to_info() {
    assert_that!(*LogLevel::from_str("loud").unwrap(), eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_level_env_override_when_load_then_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[logging]\nlevel = \"error\"");
    let _level = EnvGuard::set("CF_LOG_LEVEL", "debug");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_blank_log_file_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _file = EnvGuard::set("CF_LOG_FILE", "");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
