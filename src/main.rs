//! Contact assistant - Main entry point
//!
//! Runs the interactive contact book on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::assistant::{run_session, Assistant};
use contact_assistant::clock::SystemClock;
use contact_assistant::Config;
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        birthday_window_days = config.birthday_window_days,
        "Starting contact assistant"
    );

    let mut assistant = Assistant::new(SystemClock, &config);
    run_session(
        &mut assistant,
        BufReader::new(stdin()),
        stdout(),
        &config.prompt,
    )
    .await?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
