//! Terminal session lifetime: raw mode plus alternate screen while the
//! composer runs, and SIGINT/SIGTERM turned into a flag the event loop polls.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Puts the terminal into composer mode; puts it back on drop.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        use crossterm::{cursor, event::EnableBracketedPaste, execute, terminal};

        terminal::enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::SetCursorStyle::BlinkingBar
        )?;
        Ok(guard)
    }

    /// Leaves composer mode. Later calls do nothing.
    pub fn leave(&mut self) -> io::Result<()> {
        use crossterm::{cursor, event::DisableBracketedPaste, execute, terminal};

        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        let screen = execute!(
            io::stdout(),
            DisableBracketedPaste,
            terminal::LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape
        );
        // Raw mode is left even if the screen commands failed.
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.leave() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }

    fn from_raw(raw: usize) -> Option<Self> {
        match raw {
            0 => None,
            SIGINT_RAW => Some(TerminationSignal::SigInt),
            _ => Some(TerminationSignal::SigTerm),
        }
    }
}

const SIGINT_RAW: usize = 2;
const SIGTERM_RAW: usize = 15;

/// Last termination signal delivered to the process, if any.
#[derive(Debug, Clone, Default)]
pub struct ShutdownFlag {
    raw: Arc<AtomicUsize>,
}

impl ShutdownFlag {
    /// Installs SIGINT/SIGTERM handlers that only record the signal; the
    /// event loop decides when to stop.
    #[cfg(unix)]
    pub fn register() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        use signal_hook::flag;

        let shutdown = Self::default();
        flag::register_usize(SIGINT, Arc::clone(&shutdown.raw), SIGINT_RAW)?;
        flag::register_usize(SIGTERM, Arc::clone(&shutdown.raw), SIGTERM_RAW)?;
        Ok(shutdown)
    }

    #[cfg(not(unix))]
    pub fn register() -> io::Result<Self> {
        Ok(Self::default())
    }

    pub fn received(&self) -> Option<TerminationSignal> {
        TerminationSignal::from_raw(self.raw.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
