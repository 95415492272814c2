//! Flat navigation over a single collection.

use tracing::trace;

use super::Nav;
use crate::item::Item;
use crate::types::Idx;

/// Selection index over the current target collection.
///
/// Polarity is reversed on purpose: `up` grows the index, `down` shrinks it.
/// Without a focus layer `left` / `right` are `up` / `down`, and `enter` /
/// `esc` are never consumed here.
#[derive(Default)]
pub struct NavNode<'a> {
    sel: Idx,
    target: Option<&'a dyn Item>,
}

impl<'a> NavNode<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node already bound to a target.
    pub fn with_target(target: &'a dyn Item) -> Self {
        Self {
            sel: 0,
            target: Some(target),
        }
    }

    /// Last valid index of the target, 0 when unbound or empty.
    fn last(&self) -> Idx {
        self.target.map_or(0, |t| t.size().saturating_sub(1))
    }
}

impl<'a> Nav<'a> for NavNode<'a> {
    fn can_nav(&self) -> bool {
        true
    }

    fn shared_nav(&self) -> bool {
        false
    }

    fn pos(&self) -> Idx {
        self.sel
    }

    fn selected(&self, idx: Idx) -> bool {
        self.sel == idx
    }

    fn set_target(&mut self, target: &'a dyn Item) {
        self.target = Some(target);
    }

    fn target(&self) -> Option<&'a dyn Item> {
        self.target
    }

    fn focus(&self) -> Option<&'a dyn Item> {
        self.target
    }

    fn idx(&mut self, idx: Idx) {
        self.sel = idx;
    }

    fn down(&mut self) -> bool {
        if self.sel > 0 {
            self.sel -= 1;
            trace!(sel = self.sel, "nav down");
            return true;
        }
        false
    }

    fn up(&mut self) -> bool {
        if self.sel < self.last() {
            self.sel += 1;
            trace!(sel = self.sel, "nav up");
            return true;
        }
        false
    }

    fn left(&mut self) -> bool {
        self.up()
    }

    fn right(&mut self) -> bool {
        self.down()
    }

    fn enter(&mut self) -> bool {
        false
    }

    fn esc(&mut self) -> bool {
        false
    }
}

impl std::fmt::Debug for NavNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavNode")
            .field("sel", &self.sel)
            .field("target", &self.target.map(|t| t.size()))
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
