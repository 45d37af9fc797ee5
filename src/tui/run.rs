//! TUI entry point and terminal setup.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}
};
use ratatui::{prelude::CrosstermBackend, Terminal};

use crate::model::BurndownModel;
use crate::tui::app::App;

/// Initialise the terminal, run the burndown UI over `model`, and restore
/// the terminal even when the session fails.
pub fn run_tui(model: BurndownModel) -> io::Result<()> {
    let mut stdout = io::stdout();
    enter_terminal(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal(&mut io::stdout());
            return Err(e);
        }
    };

    let mut app = App::new(model);
    let result = app.run(&mut terminal);

    restore_terminal(terminal.backend_mut())?;

    tracing::info!(tasks = app.model().tasks().len(), "ui session ended");
    result
}

/// Switch to raw mode and the alternate screen. Undoes raw mode when the
/// screen switch fails.
fn enter_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
        let _ = restore_terminal(out);
        return Err(e);
    }
    Ok(())
}

/// Leave the alternate screen and raw mode and show the cursor.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_failed_setup_leaves_raw_mode_off() {
        assert!(enter_terminal(&mut BrokenWriter).is_err());
        assert!(!crossterm::terminal::is_raw_mode_enabled().unwrap_or(false));
    }

    #[test]
    fn test_restore_terminal_writes_leave_sequences() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }
}
