//! Per-user directories for the config file and logs.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{SqError, SqResult};

/// Directory holding `config.toml`, e.g. `~/.config/SleepIQ` on Linux.
pub fn config_dir() -> SqResult<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or_else(|| SqError::Config("could not determine config directory".into()))
}

/// Directory for application data such as logs, e.g. `~/.local/share/SleepIQ`.
pub fn data_dir() -> SqResult<PathBuf> {
    dirs::data_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or_else(|| SqError::Config("could not determine data directory".into()))
}
