use std::io;
use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use thread_composer::core::InputEvent;
use thread_composer::kernel::services::adapters::{
    ensure_settings_file, load_settings, ConfigService, KeybindingService,
};
use thread_composer::kernel::services::ports::Settings;
use thread_composer::tui::render::render;
use thread_composer::tui::terminal_guard::{ShutdownFlag, TerminalGuard};
use thread_composer::tui::Composer;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn load_user_settings() -> Settings {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "settings file unavailable");
    }
    match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "using default settings");
            Settings::default()
        }
    }
}

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let settings = load_user_settings();
    let config = ConfigService::from_settings(&settings);
    let mut keybindings = KeybindingService::new();
    let skipped = keybindings.apply_rules(&settings.keybindings);
    if skipped > 0 {
        tracing::warn!(skipped, "some keybinding rules were ignored");
    }

    let mut composer = Composer::new(&config, keybindings);

    let shutdown = ShutdownFlag::register()?;
    let guard = TerminalGuard::enter()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| render(&composer, frame))?;
            dirty = false;
        }

        if let Some(signal) = shutdown.received() {
            tracing::info!(?signal, "termination signal received");
            break;
        }

        let ready = match crossterm::event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => false,
            Err(err) => return Err(err),
        };
        if ready {
            let event = InputEvent::from(crossterm::event::read()?);
            dirty |= composer.handle_input(&event, Instant::now());
        }

        if composer.should_quit() {
            break;
        }
    }

    drop(guard);
    tracing::info!(
        blocks = composer.store().state().len(),
        "composer closed"
    );
    if let Some(signal) = shutdown.received() {
        drop(logging);
        std::process::exit(signal.exit_code());
    }
    Ok(())
}
