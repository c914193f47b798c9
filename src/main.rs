//! taxguard - Terminal client for the tax fraud detection service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use taxguard_app::config::{self, CliOverrides};
use taxguard_client::PredictClient;
use taxguard_core::prelude::*;

/// Terminal client for the tax fraud detection service
#[derive(Parser, Debug)]
#[command(name = "taxguard")]
#[command(about = "Screen financial declarations for tax fraud", long_about = None)]
struct Args {
    /// Base URL of the prediction service (overrides config and TAXGUARD_SERVER)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Request timeout in seconds (minimum 1)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file to use instead of the default lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write .taxguard/config.toml in the current directory and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if args.init_config {
        let path = config::init_config_dir(&cwd)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    // Log to file, the TUI owns stdout
    taxguard_core::logging::init()?;

    let loaded = config::load_settings(args.config.as_deref(), &cwd)?;
    match &loaded.source {
        Some(path) => info!("Settings loaded from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let mut settings = loaded.settings;
    config::apply_env_overrides(&mut settings);
    config::apply_cli_overrides(
        &mut settings,
        &CliOverrides {
            server: args.server,
            timeout_secs: args.timeout,
        },
    );
    config::validate_settings(&mut settings)?;

    let client = PredictClient::new(&settings.service.base_url, settings.service.timeout())?;

    let result = taxguard_tui::run(settings, client).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("taxguard exiting");
    result
}
