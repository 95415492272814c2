//! # spark-menu
//!
//! Menu navigation core for small devices and terminals.
//!
//! Tracks where the cursor is inside a hierarchy of menu items and
//! interprets the six navigation commands (enter, esc, up, down, left,
//! right) against it.
//!
//! ## Architecture
//!
//! Navigation is built from layers composed at compile time, each one
//! implementing the same [`Nav`] capability set:
//!
//! ```text
//! input → ItemNav (focused field?) → NavNode (selection index) → target items
//!              ↑
//!   SharedNav ─┘  (extra pipelines forwarding to one shared chain)
//! ```
//!
//! The chain never owns menu content: targets and focused fields are
//! `&'a dyn Item` back-references into storage the caller keeps alive.
//!
//! ## Modules
//!
//! - [`types`] - Commands, formatting roles, activation results, edit modes
//! - [`item`] - The item contract the navigator walks, plus stock items
//! - [`nav`] - Selection, focus delegation, sharing and reactive layers
//! - [`state`] - Key bindings, crossterm input conversion, command routing
//! - [`renderer`] - Plain text menu renderer

pub mod item;
pub mod nav;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use item::{Item, ItemList, NumField, Prompt, same_item};

pub use nav::{ItemNav, Nav, NavNode, ReactiveNav, SharedNav};

pub use renderer::TextRenderer;

pub use state::{KeyBindings, convert_key_event, poll_command, read_command, route};
