//! SleepIQ Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other SleepIQ crates:
//! - Application configuration (API host, account credentials, logging)
//! - Global error types covering every failure the client can surface
//! - Structured logging with tracing
//! - Per-user config and data directories
//! - Common constants

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod constants;

// Re-export commonly used items at the crate root
pub use config::AppConfig;
pub use error::{SqError, SqResult};
pub use logging::init_logging;
