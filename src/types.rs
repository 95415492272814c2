//! Core types for spark-menu.
//!
//! The small vocabulary shared by navigation, input and rendering:
//! commands, formatting roles, activation results and edit modes.

use std::fmt;

/// Index into an item collection.
pub type Idx = usize;

// =============================================================================
// Navigation Commands (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Navigation commands issued by an input source.
    ///
    /// Stored as flags so input layers can describe what a key may produce:
    /// `Cmd::UP | Cmd::DOWN`. Dispatch only ever acts on a single command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Cmd: u8 {
        const NONE = 0;
        const ENTER = 1 << 0;
        const ESC = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const LEFT = 1 << 4;
        const RIGHT = 1 << 5;
        const INDEX = 1 << 6;
        const ACCEL = 1 << 7;
    }
}

// INDEX and ACCEL carry no display name of their own
const CMD_NAMES: [(Cmd, &str); 6] = [
    (Cmd::ENTER, "Enter"),
    (Cmd::ESC, "Esc"),
    (Cmd::UP, "Up"),
    (Cmd::DOWN, "Down"),
    (Cmd::LEFT, "Left"),
    (Cmd::RIGHT, "Right"),
];

impl Cmd {
    /// Display name of one of the six navigation commands. Anything else
    /// (combinations, `INDEX`, `ACCEL`) prints as `Cmd?`.
    pub fn name(self) -> &'static str {
        if self.is_empty() {
            return "None";
        }
        CMD_NAMES
            .iter()
            .find(|(cmd, _)| *cmd == self)
            .map_or("Cmd?", |(_, name)| *name)
    }

    /// True for the four directional commands.
    #[inline]
    pub fn is_move(self) -> bool {
        !self.is_empty() && (Cmd::UP | Cmd::DOWN | Cmd::LEFT | Cmd::RIGHT).contains(self)
    }
}

impl fmt::Display for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Formatting Roles (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Formatting parts/roles a renderer can emit.
    ///
    /// Combine with bitwise OR: `Tag::CURSOR | Tag::INDEX`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Tag: u16 {
        const NONE = 0;
        const RAW = 1 << 0;
        const PANEL = 1 << 1;
        const MENU = 1 << 2;
        const TITLE = 1 << 3;
        const BODY = 1 << 4;
        const ITEM = 1 << 5;
        const INDEX = 1 << 6;
        const CURSOR = 1 << 7;
        const NAME = 1 << 8;
        const MODE = 1 << 9;
        const VALUE = 1 << 10;
        const UNIT = 1 << 11;
    }
}

impl Tag {
    /// Exact role match.
    #[inline]
    pub fn is(self, other: Tag) -> bool {
        self == other
    }

    /// True when every role in `other` is part of this set.
    #[inline]
    pub fn has(self, other: Tag) -> bool {
        self.contains(other)
    }
}

// =============================================================================
// Activation / Edit Mode
// =============================================================================

/// What the surrounding menu should do after a command was routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActRes {
    /// Navigation state stays as it is.
    #[default]
    Stay,
    /// Open the selected item (descend into a submenu).
    Open,
    /// Close the current item (leave the menu level).
    Close,
}

/// Edit mode of the navigation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Edit,
    Tune,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Normal => "Normal",
            Mode::Edit => "Edit",
            Mode::Tune => "Tune",
        })
    }
}
