//! SleepIQ CLI - Command-line interface for SleepIQ beds.
//!
//! Lists beds, sleepers and live bed status, and drives the foundation
//! (outlets, presets, firmness) from the terminal. Useful for scripting and
//! for checking an account's data without the vendor app.

mod commands;

use clap::{Parser, Subcommand};
use tracing::debug;

use sq_api::{Outlet, OutletSetting, Preset, Side, SleepNumber};
use sq_core::config::AppConfig;
use sq_core::error::SqResult;
use sq_core::logging;

/// SleepIQ - control and inspect Sleep Number beds.
#[derive(Parser)]
#[command(
    name = "sleepiq",
    version,
    about = "SleepIQ bed client CLI",
    long_about = "A command-line interface for the SleepIQ cloud API.\n\
                   Log in with your SleepIQ account to read bed status and control the foundation."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Account login (overrides config).
    #[arg(short, long, global = true)]
    login: Option<String>,

    /// Account password (overrides config; prompted for when missing).
    #[arg(short, long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the account credentials are accepted.
    Login,
    /// List the sleepers on the account.
    Sleepers,
    /// List beds.
    Beds {
        /// Include each side's live status and sleeper.
        #[arg(short, long)]
        status: bool,
    },
    /// Show the live status of every bed.
    FamilyStatus,
    /// Switch a foundation outlet or light on or off.
    Lights {
        /// Bed position in the bed list (0-based).
        bed: usize,
        /// Outlet number (1-4).
        outlet: Outlet,
        /// on or off.
        setting: OutletSetting,
    },
    /// Move one side of the foundation to a preset position.
    Preset {
        /// Bed position in the bed list (0-based).
        bed: usize,
        /// Side (L or R).
        side: Side,
        /// favorite, read, watch-tv, flat, zero-gravity, snore (or 1-6).
        preset: Preset,
        /// Move at slow speed.
        #[arg(long)]
        slow: bool,
    },
    /// Set the firmness of one side.
    SleepNumber {
        /// Bed position in the bed list (0-based).
        bed: usize,
        /// Side (L or R).
        side: Side,
        /// Firmness, 0-100 in steps of 5.
        value: SleepNumber,
    },
}

#[tokio::main]
async fn main() -> SqResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(std::path::Path::new(path))?,
        None => AppConfig::load_default()?,
    };

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".into();
    }
    let _guard = logging::init_logging(&config.logging)?;
    debug!("SleepIQ CLI v{}", sq_core::constants::APP_VERSION);

    if let Some(login) = cli.login {
        config.account.login = login;
    }
    if let Some(password) = cli.password {
        config.account.password = password;
    }

    let client = commands::create_client(&mut config)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Login => commands::login::run(&client, cli.format).await,
        Commands::Sleepers => commands::sleepers::run(&client, cli.format).await,
        Commands::Beds { status } => commands::beds::list(&client, status, cli.format).await,
        Commands::FamilyStatus => commands::beds::family_status(&client, cli.format).await,
        Commands::Lights { bed, outlet, setting } => {
            commands::foundation::lights(&client, bed, outlet, setting, cli.format).await
        }
        Commands::Preset { bed, side, preset, slow } => {
            commands::foundation::preset(&client, bed, side, preset, slow, cli.format).await
        }
        Commands::SleepNumber { bed, side, value } => {
            commands::foundation::sleep_number(&client, bed, side, value, cli.format).await
        }
    }
}
