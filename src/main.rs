// ABOUTME: Entry point for blinkwatch — a terminal controller for the eye-strain monitoring service.
// ABOUTME: Parses CLI args, loads config, sets up file logging, and launches the app.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use blinkwatch::app::App;
use blinkwatch::config::{Config, Overrides};

/// Start/stop a remote camera session and get alerted on eye strain and fatigue.
#[derive(Debug, Parser)]
#[command(name = "blinkwatch", version, about)]
struct Args {
    /// Base URL of the monitoring service.
    #[arg(long, env = "BLINKWATCH_SERVER")]
    server: Option<String>,

    /// Camera identifier selected at startup.
    #[arg(long, env = "BLINKWATCH_CAMERA")]
    camera: Option<String>,

    /// Seconds between polls.
    #[arg(long)]
    interval: Option<u64>,

    /// Disable the audible alert tone.
    #[arg(long)]
    no_tone: bool,

    /// Config file to read instead of ~/.blinkwatch/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the tracing log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blinkwatch=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load local .env if present so BLINKWATCH_* variables reach clap.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    init_tracing(&args.log_file.clone().unwrap_or_else(Config::log_path))?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(Overrides {
        server: args.server,
        camera: args.camera,
        interval_seconds: args.interval,
        no_tone: args.no_tone,
    })?;

    App::new(config).run().await
}
