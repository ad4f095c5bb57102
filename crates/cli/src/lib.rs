//! # shelf-cli
//!
//! Interactive lending desk for the shelf library.
//!
//! ## Configuration
//!
//! - `SHELF_ENV` / `--environment` - settings overlay to load (default: `local`)
//! - `SHELF_CONFIG_DIR` / `--config-dir` - directory holding `base.toml` and
//!   the environment overlay (default: `./config`)
//! - `SHELF__*` - individual setting overrides, e.g. `SHELF__LIBRARY__NAME`

pub mod command;
pub mod render;
pub mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shelf_kernel::settings::{Settings, TelemetrySettings};

use session::{Banner, Session};

/// Printed on stderr when the library cannot be opened.
pub const STARTUP_FAILURE: &str = "An unexpected error occurred while starting the system.";

/// Shelf CLI - lending library desk.
#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings environment overlay (local, staging, production).
    #[arg(long, env = "SHELF_ENV", default_value = "local")]
    pub environment: String,

    /// Directory containing configuration files.
    #[arg(long, env = "SHELF_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

/// Load settings and install logging.
///
/// Logging is installed with defaults when settings fail to load so the
/// failure itself is still recorded.
pub fn bootstrap(cli: &Cli) -> anyhow::Result<Settings> {
    match Settings::load_from(&cli.environment, cli.config_dir.as_deref()) {
        Ok(settings) => {
            shelf_telemetry::init(&settings.telemetry)?;
            Ok(settings)
        }
        Err(err) => {
            shelf_telemetry::init(&TelemetrySettings::default()).ok();
            Err(err.context("failed to load shelf settings"))
        }
    }
}

/// Open the library and serve the terminal until the patron leaves.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = bootstrap(cli)?;

    tracing::info!(
        env = ?settings.environment,
        library = %settings.library.name,
        "shelf bootstrap starting"
    );

    let mut inventory =
        shelf_app::build_library(&settings).context("failed to stock the library")?;

    println!("Loading virtual assistant...");

    let banner = Banner {
        library: settings.library.name.clone(),
        assistant: settings.library.assistant.clone(),
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut inventory, stdin.lock(), stdout.lock(), banner)
        .run()
        .context("terminal session failed")?;

    tracing::info!("shelf session ended");
    Ok(())
}
