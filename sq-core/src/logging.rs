//! Log output for the SleepIQ client and CLI.
//!
//! Console output goes to stderr so that `--format json` keeps stdout clean.
//! A copy is written to a daily-rotated `sleepiq.log` in the configured
//! directory, as plain text or JSON lines.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{SqError, SqResult};

/// File name prefix of the rotated log files.
pub const LOG_FILE_NAME: &str = "sleepiq.log";

/// HTTP stack targets that are capped at `warn` unless named explicitly.
const NOISY_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Keeps the non-blocking file writer alive; dropping it flushes the log.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG`, when set, replaces the configured level entirely.
pub fn init_logging(config: &LoggingConfig) -> SqResult<LogGuard> {
    let log_dir = config.log_dir()?;
    std::fs::create_dir_all(&log_dir)?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME));

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives("info")));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let json_file = config.json_output.then(|| {
        fmt::layer()
            .with_writer(writer.clone())
            .json()
            .with_current_span(false)
    });
    let text_file = (!config.json_output).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(json_file)
        .with(text_file)
        .try_init()
        .map_err(|e| SqError::Config(format!("logging already initialized: {e}")))?;

    tracing::debug!(
        "logging to {} at level {}",
        log_dir.join(LOG_FILE_NAME).display(),
        config.level
    );

    Ok(LogGuard { _guard: guard })
}

/// Expand a configured level into filter directives.
///
/// A bare level such as `debug` also caps the HTTP stack at `warn`, so
/// connection chatter does not drown out request logs. A value that already
/// contains directives (`sq_api=trace`) is used as given.
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.is_empty() {
        return filter_directives("info");
    }
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let mut directives = level.to_ascii_lowercase();
    for target in NOISY_TARGETS {
        directives.push_str(&format!(",{target}=warn"));
    }
    directives
}
