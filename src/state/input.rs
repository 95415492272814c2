//! Input Module - Event conversion and command routing
//!
//! Bridges crossterm's event system with the navigation chain.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to a navigation command
//! - `poll_command` - Non-blocking command check with timeout
//! - `read_command` - Blocking command read
//! - `route` - Issue a command and tell the menu what to do next
//!
//! # Example
//!
//! ```ignore
//! use spark_menu::state::{poll_command, route};
//! use spark_menu::{ActRes, KeyBindings};
//! use std::time::Duration;
//!
//! let keys = KeyBindings::default();
//! loop {
//!     if let Some(cmd) = poll_command(&keys, Duration::from_millis(16))? {
//!         if route(&mut nav, cmd) == ActRes::Close {
//!             break;
//!         }
//!     }
//! }
//! ```

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyEvent as CrosstermKeyEvent, KeyEventKind, poll, read};
use tracing::debug;

use super::keyboard::KeyBindings;
use crate::nav::Nav;
use crate::types::{ActRes, Cmd, Mode};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to a navigation command.
/// Release events and unbound keys produce `None`.
pub fn convert_key_event(keys: &KeyBindings, event: CrosstermKeyEvent) -> Option<Cmd> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    keys.lookup(event.code)
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for a command with timeout.
/// Returns None if no bound key arrived within timeout.
pub fn poll_command(keys: &KeyBindings, timeout: Duration) -> std::io::Result<Option<Cmd>> {
    if poll(timeout)? {
        read_command(keys)
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking) and convert it.
pub fn read_command(keys: &KeyBindings) -> std::io::Result<Option<Cmd>> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(keys, key)),
        _ => Ok(None),
    }
}

// =============================================================================
// COMMAND ROUTING
// =============================================================================

/// Issue `cmd` to the chain and decide what the surrounding menu does next.
///
/// - consumed: `Stay`
/// - `ESC` nobody consumed: `Close` (leave this menu level)
/// - `ENTER` nobody consumed, no field captured, on an item that is itself
///   a collection: `Open` (descend into it)
/// - anything else: `Stay`
pub fn route<'a, N: Nav<'a> + ?Sized>(nav: &mut N, cmd: Cmd) -> ActRes {
    if nav.cmd(cmd) {
        return ActRes::Stay;
    }

    let res = if cmd == Cmd::ESC {
        ActRes::Close
    } else if cmd == Cmd::ENTER
        && nav.mode() == Mode::Normal
        && nav
            .target()
            .and_then(|t| t.get(nav.pos()))
            .is_some_and(|item| item.size() > 0)
    {
        ActRes::Open
    } else {
        ActRes::Stay
    };

    if res != ActRes::Stay {
        debug!(cmd = %cmd, pos = nav.pos(), ?res, "command not consumed");
    }
    res
}

// =============================================================================
// TESTS
// =============================================================================
