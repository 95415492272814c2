//! Keyboard Module - Key bindings for navigation commands
//!
//! Maps terminal key codes to navigation [`Cmd`]s. The table is plain
//! configuration: start from [`KeyBindings::default`] and `bind` / `unbind`
//! what the device needs.
//!
//! # Example
//!
//! ```ignore
//! use crossterm::event::KeyCode;
//! use spark_menu::{Cmd, KeyBindings};
//!
//! let keys = KeyBindings::default()
//!     .bind(KeyCode::Char('+'), Cmd::UP)
//!     .bind(KeyCode::Char('-'), Cmd::DOWN)
//!     .unbind(KeyCode::Backspace);
//! ```

use std::collections::HashMap;

use crossterm::event::KeyCode;

use crate::types::Cmd;

/// Key code to command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: HashMap<KeyCode, Cmd>,
}

impl KeyBindings {
    /// Table with no bindings at all.
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Bind `code` to `cmd`, replacing any previous binding.
    pub fn bind(mut self, code: KeyCode, cmd: Cmd) -> Self {
        self.map.insert(code, cmd);
        self
    }

    pub fn unbind(mut self, code: KeyCode) -> Self {
        self.map.remove(&code);
        self
    }

    /// Command bound to `code`.
    pub fn lookup(&self, code: KeyCode) -> Option<Cmd> {
        self.map.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    /// Arrow keys, vi keys, Enter and Esc/Backspace.
    ///
    /// `Cmd::UP` grows the selection index, which is the next row down on a
    /// top-to-bottom list, so the down arrow maps to it.
    fn default() -> Self {
        Self::empty()
            .bind(KeyCode::Down, Cmd::UP)
            .bind(KeyCode::Char('j'), Cmd::UP)
            .bind(KeyCode::Up, Cmd::DOWN)
            .bind(KeyCode::Char('k'), Cmd::DOWN)
            .bind(KeyCode::Left, Cmd::LEFT)
            .bind(KeyCode::Right, Cmd::RIGHT)
            .bind(KeyCode::Enter, Cmd::ENTER)
            .bind(KeyCode::Esc, Cmd::ESC)
            .bind(KeyCode::Backspace, Cmd::ESC)
    }
}

// =============================================================================
// TESTS
// =============================================================================
