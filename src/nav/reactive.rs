//! Reactive cursor - publishes navigation state as signals.
//!
//! Render effects read `pos_signal()` / `mode_signal()` and re-run when the
//! cursor moves or a field grabs or releases focus. The navigation itself
//! stays synchronous: signals are written after the inner call returns.
//!
//! Signals only move when a command passes through this layer, so with
//! several pipelines the layer belongs inside the shared cell:
//!
//! ```ignore
//! let nav = RefCell::new(ReactiveNav::new(ItemNav::new(NavNode::new())));
//! let lcd = SharedNav::new(&nav);
//! let serial = SharedNav::new(&nav);
//! ```

use std::cell::Cell;

use spark_signals::{Signal, signal};

use super::Nav;
use crate::item::Item;
use crate::types::{Idx, Mode};

/// Forwarding layer that mirrors `pos()` and `mode()` into signals.
///
/// Must own the chain it observes: wrap it in the `RefCell` that
/// [`SharedNav`](super::SharedNav)s point at, never around a `SharedNav`.
pub struct ReactiveNav<N> {
    inner: N,
    pos: Signal<Idx>,
    mode: Signal<Mode>,
    // Last written values, compared without a tracked signal read
    last_pos: Cell<Idx>,
    last_mode: Cell<Mode>,
}

impl<'a, N: Nav<'a>> ReactiveNav<N> {
    /// Wrap `inner`.
    ///
    /// # Panics
    ///
    /// If `inner` forwards to a shared chain. Commands issued through other
    /// forwarders would bypass this layer and leave the signals stale.
    pub fn new(inner: N) -> Self {
        assert!(
            !inner.shared_nav(),
            "ReactiveNav must wrap the shared chain itself, not a SharedNav"
        );
        let pos = inner.pos();
        let mode = inner.mode();
        Self {
            inner,
            pos: signal(pos),
            mode: signal(mode),
            last_pos: Cell::new(pos),
            last_mode: Cell::new(mode),
        }
    }

    /// Selection index signal (shared handle).
    pub fn pos_signal(&self) -> Signal<Idx> {
        self.pos.clone()
    }

    /// Edit mode signal (shared handle).
    pub fn mode_signal(&self) -> Signal<Mode> {
        self.mode.clone()
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    /// Write changed values only, so unchanged state never wakes effects.
    fn sync(&self) {
        let pos = self.inner.pos();
        if self.last_pos.replace(pos) != pos {
            self.pos.set(pos);
        }
        let mode = self.inner.mode();
        if self.last_mode.replace(mode) != mode {
            self.mode.set(mode);
        }
    }

    fn tracked(&mut self, f: impl FnOnce(&mut N) -> bool) -> bool {
        let result = f(&mut self.inner);
        self.sync();
        result
    }
}

impl<'a, N: Nav<'a>> Nav<'a> for ReactiveNav<N> {
    fn can_nav(&self) -> bool {
        self.inner.can_nav()
    }

    fn shared_nav(&self) -> bool {
        self.inner.shared_nav()
    }

    fn pos(&self) -> Idx {
        self.inner.pos()
    }

    fn selected(&self, idx: Idx) -> bool {
        self.inner.selected(idx)
    }

    fn set_target(&mut self, target: &'a dyn Item) {
        self.inner.set_target(target);
        self.sync();
    }

    fn target(&self) -> Option<&'a dyn Item> {
        self.inner.target()
    }

    fn focus(&self) -> Option<&'a dyn Item> {
        self.inner.focus()
    }

    fn idx(&mut self, idx: Idx) {
        self.inner.idx(idx);
        self.sync();
    }

    fn down(&mut self) -> bool {
        self.tracked(|n| n.down())
    }

    fn up(&mut self) -> bool {
        self.tracked(|n| n.up())
    }

    fn left(&mut self) -> bool {
        self.tracked(|n| n.left())
    }

    fn right(&mut self) -> bool {
        self.tracked(|n| n.right())
    }

    fn enter(&mut self) -> bool {
        self.tracked(|n| n.enter())
    }

    fn esc(&mut self) -> bool {
        self.tracked(|n| n.esc())
    }
}

// =============================================================================
// TESTS
// =============================================================================
