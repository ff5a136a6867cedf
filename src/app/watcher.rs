//! Keyboard cancellation watcher.
//!
//! The watcher runs on a blocking thread next to the fetches, polls for the
//! cancel key and cancels the shared token when it sees it. It stops on its
//! own once the token is cancelled by anyone else.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::terminal::{is_interactive, RawModeGuard};
use crate::config::KEY_POLL_INTERVAL;

/// Key that cancels a run by default.
pub const CANCEL_KEY: KeyCode = KeyCode::Char(' ');

/// Source of key presses for the watcher.
pub trait KeySource: Send + 'static {
    /// Waits up to `timeout` for a key press. `Ok(None)` means nothing arrived.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>>;
}

/// Key presses read from the process terminal.
///
/// Raw mode is held while this value lives. Without an interactive terminal
/// no key ever arrives and polling just waits out the timeout.
pub struct TerminalKeys {
    interactive: bool,
    _raw_mode: Option<RawModeGuard>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        let interactive = is_interactive();
        let raw_mode = if interactive {
            match RawModeGuard::new() {
                Ok(guard) => Some(guard),
                Err(e) => {
                    warn!("Could not enable raw terminal mode: {e}");
                    None
                }
            }
        } else {
            info!("No interactive terminal, keyboard cancellation disabled");
            None
        };
        Self {
            interactive,
            _raw_mode: raw_mode,
        }
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for TerminalKeys {
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyEvent>> {
        if !self.interactive {
            std::thread::sleep(timeout);
            return Ok(None);
        }
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// True for the trigger key, and for Ctrl+C since raw mode swallows SIGINT.
fn is_cancel_key(key: &KeyEvent, trigger: KeyCode) -> bool {
    key.code == trigger
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')))
}

/// Polls `source` until the cancel key arrives or `cancel` is set elsewhere.
///
/// Returns `true` if this call cancelled the token. A terminal error ends the
/// watch without cancelling.
pub fn watch_keys<S: KeySource>(
    cancel: &CancellationToken,
    trigger: KeyCode,
    source: &mut S,
    interval: Duration,
) -> bool {
    while !cancel.is_cancelled() {
        match source.poll_key(interval) {
            Ok(Some(key)) if is_cancel_key(&key, trigger) => {
                info!("Cancellation requested from keyboard, no new pages will be started");
                cancel.cancel();
                return true;
            }
            Ok(Some(key)) => debug!("Ignoring key {:?}", key.code),
            Ok(None) => {}
            Err(e) => {
                warn!("Keyboard watcher stopped: {e}");
                return false;
            }
        }
    }
    debug!("Keyboard watcher stopping");
    false
}

/// Starts the watcher on a blocking thread.
///
/// The returned handle resolves to `true` if the watcher cancelled `cancel`.
pub fn spawn_key_watcher<S: KeySource>(
    cancel: CancellationToken,
    trigger: KeyCode,
    mut source: S,
) -> JoinHandle<bool> {
    tokio::task::spawn_blocking(move || {
        watch_keys(&cancel, trigger, &mut source, KEY_POLL_INTERVAL)
    })
}
