//! CLI command implementations.

pub mod beds;
pub mod foundation;
pub mod login;
pub mod sleepers;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use dialoguer::Password;

use sq_api::{Credentials, SleepIqClient};
use sq_core::config::AppConfig;
use sq_core::error::{SqError, SqResult};

/// Helper to create an API client from config, prompting for a missing password.
pub fn create_client(config: &mut AppConfig) -> SqResult<SleepIqClient> {
    if config.account.login.is_empty() {
        return Err(SqError::MissingConfig(
            "account login (use --login or set [account] login in config)".into(),
        ));
    }

    if config.account.password.is_empty() {
        config.account.password = Password::new()
            .with_prompt(format!("Password for {}", config.account.login))
            .interact()
            .map_err(|e| SqError::Config(format!("could not read password: {e}")))?;
    }

    SleepIqClient::new(&config.api, Credentials::from(&config.account))
}

/// A table with the shared CLI styling.
pub fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render an optional JSON attribute for a table cell.
pub fn cell(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => "-".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> SqResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell(None), "-");
        assert_eq!(cell(Some(&json!(null))), "-");
        assert_eq!(cell(Some(&json!("P5"))), "P5");
        assert_eq!(cell(Some(&json!(40))), "40");
        assert_eq!(cell(Some(&json!(true))), "true");
    }

    #[test]
    fn test_missing_login_is_config_error() {
        let mut config = AppConfig::default();
        let err = create_client(&mut config).err().unwrap();
        assert!(matches!(err, SqError::MissingConfig(_)));
    }
}
