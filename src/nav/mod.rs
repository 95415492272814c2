//! Navigation Module - Cursor and focus state for menus
//!
//! Navigation is composed from layers that all implement [`Nav`]:
//!
//! - **NavNode** - selection index over the current target collection
//! - **ItemNav** - lets a focused field take over the commands
//! - **SharedNav** - forwards everything to one externally owned chain
//! - **ReactiveNav** - mirrors the cursor into signals for render effects
//!
//! A command enters at the outermost layer and travels inward until some
//! layer consumes it. Its boolean result comes back out unchanged.
//!
//! # Example
//!
//! ```ignore
//! use spark_menu::nav::{ItemNav, Nav, NavNode, SharedNav};
//! use std::cell::RefCell;
//!
//! let nav = RefCell::new(ItemNav::new(NavNode::new()));
//! nav.borrow_mut().set_target(&menu);
//!
//! // Two pipelines, one cursor
//! let mut lcd = SharedNav::new(&nav);
//! let mut serial = SharedNav::new(&nav);
//! lcd.up();
//! assert_eq!(serial.pos(), 1);
//! ```

mod item_nav;
mod node;
mod reactive;
mod shared;

pub use item_nav::ItemNav;
pub use node::NavNode;
pub use reactive::ReactiveNav;
pub use shared::SharedNav;

use crate::item::{Item, same_item};
use crate::types::{Cmd, Idx, Mode};

// =============================================================================
// NAV TRAIT
// =============================================================================

/// The capability set every navigation layer exposes.
///
/// `'a` is the lifetime of the menu storage the chain points into. Movement
/// commands return whether the cursor (or the focused field) changed.
/// `enter` / `esc` return whether the command was consumed.
pub trait Nav<'a> {
    fn can_nav(&self) -> bool;

    /// True when this chain forwards to a shared navigation instance.
    fn shared_nav(&self) -> bool;

    /// Current selection index.
    fn pos(&self) -> Idx;

    /// True if `idx` is the current selection.
    fn selected(&self, idx: Idx) -> bool;

    fn set_target(&mut self, target: &'a dyn Item);

    /// Collection being navigated, `None` before the first `set_target`.
    fn target(&self) -> Option<&'a dyn Item>;

    /// Item currently receiving input: the focused field, else the target.
    fn focus(&self) -> Option<&'a dyn Item>;

    /// Set the selection index directly. Not clamped.
    fn idx(&mut self, idx: Idx);

    fn up(&mut self) -> bool;
    fn down(&mut self) -> bool;
    fn left(&mut self) -> bool;
    fn right(&mut self) -> bool;
    fn enter(&mut self) -> bool;
    fn esc(&mut self) -> bool;

    /// Dispatch a single command. Anything that is not exactly one of the
    /// six navigation commands is ignored and returns false.
    fn cmd(&mut self, cmd: Cmd) -> bool {
        if cmd == Cmd::UP {
            self.up()
        } else if cmd == Cmd::DOWN {
            self.down()
        } else if cmd == Cmd::LEFT {
            self.left()
        } else if cmd == Cmd::RIGHT {
            self.right()
        } else if cmd == Cmd::ENTER {
            self.enter()
        } else if cmd == Cmd::ESC {
            self.esc()
        } else {
            tracing::trace!(cmd = %cmd, "ignored command");
            false
        }
    }

    /// `Edit` while a field other than the target holds the focus.
    fn mode(&self) -> Mode {
        if same_item(self.focus(), self.target()) {
            Mode::Normal
        } else {
            Mode::Edit
        }
    }
}

// =============================================================================
// TEST FIXTURES
// =============================================================================
