use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use faqchat::app::{
    config::{Config, BASE_URL_ENV},
    handler::Services,
    r#loop::run_loop,
    state::AppState,
};
use faqchat::domain::catalog::CatalogCache;
use faqchat::infrastructure::{
    catalog_loader::CatalogLoader, http_backend::HttpBackend, speech_command,
};

const LOG_FILE: &str = "faqchat.log";

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
        original_hook(panic_info);
    }));
}

/// Raw mode, alternate screen and pointer/focus reporting for as long as the
/// guard lives. Pointer capture is what lets clicks outside the composer
/// reach the app.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        );
    }
}

fn init_logging(config: &Config) -> Result<WorkerGuard> {
    let directory = config.log.resolved_directory();
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("create log directory {}", directory.display()))?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&directory, LOG_FILE));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("faqchat=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("init logging: {err}"))?;
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => {
            let mut config = Config::default();
            config.apply_env(std::env::var(BASE_URL_ENV).ok());
            (config, Some(err))
        }
    };
    let _log_guard = init_logging(&config)?;
    if let Some(err) = config_error {
        tracing::warn!(error = %format!("{err:#}"), "config ignored, using defaults");
    }
    tracing::info!(backend = %config.backend.base_url, catalog = %config.catalog.location, "starting");

    // Adapters are built before terminal setup so a bad config never leaves
    // the terminal in raw mode.
    let backend = Arc::new(HttpBackend::new(
        &config.backend.base_url,
        config.backend.timeout(),
    )?);
    let catalog = CatalogLoader::new(&config.catalog.location, config.backend.timeout())?;
    let speech = speech_command::recognizer_from_config(config.dictation.command.as_deref());

    let mut app_state = AppState::new(&config);
    app_state.dictation_available = speech.is_available();

    let services = Services::new(
        backend,
        Arc::new(CatalogCache::new(Arc::new(catalog))),
        speech,
    );

    let terminal_guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(
        &mut terminal,
        app_state,
        services,
        config.suggestions.debounce(),
    )
    .await;

    drop(terminal_guard);
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}
