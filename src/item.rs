//! Item Module - What the navigator walks
//!
//! The navigation layers never own menu content. They hold shared
//! back-references (`&'a dyn Item`) into storage owned by the surrounding
//! menu, so every hook takes `&self` and stateful items keep their state in
//! `Cell`s.
//!
//! - **Collections** answer `size` / `get` and may page with `left` / `right`
//! - **Fields** report `can_nav` and take over `up` / `down` / `enter` / `esc`
//!   while focused
//!
//! # Example
//!
//! ```ignore
//! use spark_menu::item::{ItemList, NumField, Prompt};
//! use std::cell::Cell;
//!
//! let volume = Cell::new(5);
//! let menu = ItemList::new("Main")
//!     .with(Prompt::new("Info"))
//!     .with(NumField::new("Volume", &volume, 0, 10, 1));
//! ```

use std::cell::Cell;
use std::fmt;

use crate::types::Idx;

// =============================================================================
// ITEM TRAIT
// =============================================================================

/// A menu item or item collection.
///
/// Every hook defaults to "nothing happened", so plain items only need
/// `print`.
pub trait Item {
    /// Number of child items (0 for leaves).
    fn size(&self) -> Idx {
        0
    }

    /// Child item at `idx`.
    fn get(&self, _idx: Idx) -> Option<&dyn Item> {
        None
    }

    /// True if this item wants to capture input focus.
    fn can_nav(&self) -> bool {
        false
    }

    /// Activation. While focused, `true` keeps the focus.
    fn enter(&self) -> bool {
        false
    }

    /// Escape. While focused, `true` releases the focus.
    fn esc(&self) -> bool {
        false
    }

    fn up(&self) -> bool {
        false
    }

    fn down(&self) -> bool {
        false
    }

    /// Collection-level left (paging), not cursor movement.
    fn left(&self) -> bool {
        false
    }

    /// Collection-level right (paging), not cursor movement.
    fn right(&self) -> bool {
        false
    }

    /// Print the item's text.
    fn print(&self, _out: &mut dyn fmt::Write) -> fmt::Result {
        Ok(())
    }
}

/// Identity comparison of two optional item references.
///
/// Only the data address is compared, vtables may differ across codegen
/// units for the same item.
pub fn same_item(a: Option<&dyn Item>, b: Option<&dyn Item>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::addr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// Static text item.
#[derive(Debug, Clone)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Item for Prompt {
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.text)
    }
}

// =============================================================================
// ITEM LIST
// =============================================================================

/// Titled collection owning its items.
///
/// Also usable as a submenu entry inside another list: it does not capture
/// focus, so entering it is left to the surrounding menu (see
/// [`crate::state::route`]).
pub struct ItemList<'i> {
    title: String,
    items: Vec<Box<dyn Item + 'i>>,
}

impl<'i> ItemList<'i> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item (builder style).
    pub fn with(mut self, item: impl Item + 'i) -> Self {
        self.items.push(Box::new(item));
        self
    }

    pub fn push(&mut self, item: impl Item + 'i) {
        self.items.push(Box::new(item));
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Item for ItemList<'_> {
    fn size(&self) -> Idx {
        self.items.len()
    }

    fn get(&self, idx: Idx) -> Option<&dyn Item> {
        self.items.get(idx).map(|item| item.as_ref())
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.title)
    }
}

// =============================================================================
// NUMERIC FIELD
// =============================================================================

/// Numeric field editing an externally owned value.
///
/// `up` / `down` step the value inside `[low, high]`. The value seen by the
/// first edit is kept so `esc` can restore it; `enter` commits and lets go
/// of the focus.
pub struct NumField<'v> {
    label: String,
    value: &'v Cell<i32>,
    low: i32,
    high: i32,
    step: i32,
    backup: Cell<Option<i32>>,
}

impl<'v> NumField<'v> {
    pub fn new(label: impl Into<String>, value: &'v Cell<i32>, low: i32, high: i32, step: i32) -> Self {
        debug_assert!(low <= high, "NumField range is empty");
        debug_assert!(step > 0, "NumField step must be positive");
        Self {
            label: label.into(),
            value,
            low,
            high,
            step,
            backup: Cell::new(None),
        }
    }

    pub fn value(&self) -> i32 {
        self.value.get()
    }

    fn step_by(&self, delta: i32) -> bool {
        let old = self.value.get();
        let new = old.saturating_add(delta).clamp(self.low, self.high);
        if new == old {
            return false;
        }
        if self.backup.get().is_none() {
            self.backup.set(Some(old));
        }
        self.value.set(new);
        true
    }
}

impl Item for NumField<'_> {
    fn can_nav(&self) -> bool {
        true
    }

    fn enter(&self) -> bool {
        self.backup.set(None);
        false
    }

    fn esc(&self) -> bool {
        if let Some(old) = self.backup.take() {
            self.value.set(old);
        }
        true
    }

    fn up(&self) -> bool {
        self.step_by(self.step)
    }

    fn down(&self) -> bool {
        self.step_by(-self.step)
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}: {}", self.label, self.value.get())
    }
}

// =============================================================================
// TESTS
// =============================================================================
