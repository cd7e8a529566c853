//! fourfold - four interactive terminal widgets.
//!
//! This is the main binary that loads the configuration, sets up logging
//! and launches the TUI application.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use fourfold_config::{
    Config, LoggingConfig, logging::LOG_ENV_VAR, persistence::find_config_file,
};
use fourfold_tui::{App, AppState, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging settings live in the config, so the subscriber only exists
    // once it has been read.
    let config_path = find_config_file();
    let config = Config::load_or_default(config_path.as_deref())?;
    init_logging(&config.logging)?;
    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded configuration"),
        None => info!("no configuration file found, using built-in defaults"),
    }

    let state = AppState::from_config(&config)?;
    let mut app = App::new(state);

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;
    info!(
        articles = config.articles.len(),
        slides = config.slideshow.slides.len(),
        "starting"
    );

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

/// Installs the global tracing subscriber.
///
/// The TUI owns the terminal, so logs only go to the configured file; with
/// no file configured nothing is installed. The filter comes from
/// `FOURFOLD_LOG` when set, otherwise from the configured level.
fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log filter {:?}", config.level))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(())
}
