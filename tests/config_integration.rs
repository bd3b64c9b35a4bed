//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use dialkit::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("DIAL_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("DIAL_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_clock_color() {
    std::env::set_var("DIAL_CLOCK__PRIMARY_COLOR", "#102030");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.clock.primary_color, "#102030");
    std::env::remove_var("DIAL_CLOCK__PRIMARY_COLOR");
}

#[test]
#[serial]
fn test_default_file_loading() {
    // Remove env vars to test file-based config
    std::env::remove_var("DIAL_WINDOW__TITLE");
    std::env::remove_var("DIAL_CLOCK__PRIMARY_COLOR");

    let config = AppConfig::load().unwrap();
    // config/default.toml agrees with the compiled defaults
    assert_eq!(config.window.title, "Dialkit");
    assert_eq!(config.clock.refresh_ms, 1000);
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    let config = AppConfig::load_from("no-such-directory").unwrap();
    assert_eq!(config.window.width, 480);
    assert_eq!(config.clock.secondary_color, "#ffffff");
}
