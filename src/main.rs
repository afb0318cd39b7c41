use anyhow::{Context, Result};
use clap::Parser;
use donate_away::cli::Cli;
use donate_away::styles::init_theme;
use donate_away::tui::{self, Tui};
use donate_away::utils::get_log_dir;
use donate_away::{App, Config};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "donate-away.log";

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));
}

/// File logging through a non-blocking writer. Keep the guard alive until
/// exit or buffered lines are lost.
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging()?;

    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    init_theme(cli.theme.unwrap_or_else(|| config.theme_type()));
    info!(config = %config_path.display(), "Starting Donate Away");

    let mut app = App::new(config)?;
    let mut terminal = Tui::new()?;
    let result = app.run(&mut terminal);
    if result.is_err() {
        let _ = tui::restore();
    }
    result
}
