//! Integration tests for application configuration.
//!
//! Tests config loading from TOML files, default values, and
//! API host normalization.

use sq_core::config::{ApiConfig, AppConfig};
use sq_core::error::SqError;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("failed to write config");
    path
}

#[test]
fn load_full_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [account]
        login = "sleeper@example.com"
        password = "p4ss"

        [api]
        base_url = "http://localhost:9000/"
        timeout_ms = 5000
        connect_timeout_secs = 3

        [logging]
        level = "debug"
        directory = "/tmp/sleepiq-logs"
        json_output = true
        "#,
    );

    let config = AppConfig::load_from_file(&path).unwrap();
    assert_eq!(config.account.login, "sleeper@example.com");
    assert_eq!(config.account.password, "p4ss");
    assert_eq!(config.api.timeout_ms, 5000);
    assert_eq!(config.api.connect_timeout_secs, 3);
    assert_eq!(config.api.effective_base_url(), "http://localhost:9000");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_output);
    assert_eq!(
        config.logging.log_dir().unwrap(),
        std::path::PathBuf::from("/tmp/sleepiq-logs")
    );
}

#[test]
fn empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let config = AppConfig::load_from_file(&path).unwrap();
    assert!(!config.is_account_configured());
    assert_eq!(config.api.base_url, "https://api.sleepiq.sleepnumber.com");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn malformed_toml_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[account\nlogin = ");

    let err = AppConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SqError::Config(_)), "got {err:?}");
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = AppConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SqError::Io(_)), "got {err:?}");
}

#[test]
fn login_without_password_is_not_configured() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [account]
        login = "sleeper@example.com"
        "#,
    );

    let config = AppConfig::load_from_file(&path).unwrap();
    assert!(!config.is_account_configured());
}

#[test]
fn base_url_without_scheme_defaults_to_https() {
    let api = ApiConfig {
        base_url: "api.example.com".into(),
        ..ApiConfig::default()
    };
    assert_eq!(api.effective_base_url(), "https://api.example.com");
}
