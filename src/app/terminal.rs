//! Terminal helpers.

use std::io::{self, IsTerminal, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};

/// Keeps the terminal in raw mode for as long as it lives.
///
/// Raw mode delivers single key presses without waiting for Enter.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Blocks until any key is pressed.
///
/// Call from a blocking context (`spawn_blocking` or a plain thread).
pub fn wait_for_any_key() -> io::Result<()> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

/// Clears the screen and moves the cursor to the top-left corner.
pub fn clear_screen() -> io::Result<()> {
    clear_screen_to(&mut io::stdout())
}

fn clear_screen_to<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))
}
