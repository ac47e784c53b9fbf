//! PlayZone - a terminal front end for PlayZone prediction markets.
//!
//! The terminal belongs to the TUI, so logs go to a daily rolling file in the
//! data directory instead of stderr.

use playzone::{App, Config, Error, Result, config::log_dir};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("playzone")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| Error::application(format!("Failed to open log file: {e}")))?;
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playzone=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
