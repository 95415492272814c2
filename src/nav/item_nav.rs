//! Focus delegation - lets a field item take over navigation input.
//!
//! Items can handle up/down/enter/esc once focused. Left/right belong to
//! the navigation system: they steal the focus back from the field (sending
//! it an `enter` first, to validate the entry) and then go to the target
//! collection itself.

use tracing::debug;

use super::Nav;
use crate::item::Item;
use crate::types::Idx;

/// Wraps a navigation layer with an optional focused field.
pub struct ItemNav<'a, N> {
    inner: N,
    focus: Option<&'a dyn Item>,
}

impl<'a, N: Nav<'a>> ItemNav<'a, N> {
    /// Wrap `inner`.
    ///
    /// # Panics
    ///
    /// If `inner` is not navigable. That is a composition mistake, not a
    /// runtime condition.
    pub fn new(inner: N) -> Self {
        assert!(inner.can_nav(), "ItemNav requires a navigable inner layer");
        Self { inner, focus: None }
    }

    /// The focused field, if any.
    pub fn focused(&self) -> Option<&'a dyn Item> {
        self.focus
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut N {
        &mut self.inner
    }

    /// Validate and drop the focused field (if any) on the way out.
    fn release(&mut self) {
        if let Some(field) = self.focus.take() {
            field.enter();
            debug!(pos = self.inner.pos(), "field released by transfer");
        }
    }
}

impl<'a, N: Nav<'a>> Nav<'a> for ItemNav<'a, N> {
    fn can_nav(&self) -> bool {
        self.focus.is_some_and(|f| f.can_nav()) || self.inner.can_nav()
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
    }

    fn target(&self) -> Option<&'a dyn Item> {
        self.inner.target()
    }

    fn focus(&self) -> Option<&'a dyn Item> {
        self.focus.or_else(|| self.inner.target())
    }

    fn idx(&mut self, idx: Idx) {
        self.inner.idx(idx);
    }

    fn down(&mut self) -> bool {
        match self.focus {
            Some(field) => field.down(),
            None => self.inner.down(),
        }
    }

    fn up(&mut self) -> bool {
        match self.focus {
            Some(field) => field.up(),
            None => self.inner.up(),
        }
    }

    fn left(&mut self) -> bool {
        self.release();
        self.inner.target().is_some_and(|t| t.left())
    }

    fn right(&mut self) -> bool {
        self.release();
        self.inner.target().is_some_and(|t| t.right())
    }

    fn enter(&mut self) -> bool {
        if let Some(field) = self.focus {
            if field.enter() {
                return true;
            }
            // Field declined further input
            self.focus = None;
            debug!(pos = self.inner.pos(), "field released");
        } else if let Some(item) = self.inner.target().and_then(|t| t.get(self.inner.pos())) {
            if item.can_nav() {
                self.focus = Some(item);
                debug!(pos = self.inner.pos(), "field captured");
            }
        }
        self.inner.enter()
    }

    fn esc(&mut self) -> bool {
        match self.focus {
            Some(field) => {
                if field.esc() {
                    self.focus = None;
                    debug!(pos = self.inner.pos(), "field escaped");
                }
                true
            }
            None => self.inner.esc(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::same_item;
    use crate::nav::NavNode;
    use crate::nav::fixtures::{Panel, Probe};

    /// Inner layer that counts the calls reaching it.
    #[derive(Default)]
    struct Recorder<'a> {
        node: NavNode<'a>,
        enters: u32,
        escs: u32,
        lefts: u32,
        rights: u32,
        navigable: bool,
    }

    impl<'a> Recorder<'a> {
        fn new() -> Self {
            Self {
                navigable: true,
                ..Self::default()
            }
        }
    }

    impl<'a> Nav<'a> for Recorder<'a> {
        fn can_nav(&self) -> bool {
            self.navigable
        }
        fn shared_nav(&self) -> bool {
            false
        }
        fn pos(&self) -> Idx {
            self.node.pos()
        }
        fn selected(&self, idx: Idx) -> bool {
            self.node.selected(idx)
        }
        fn set_target(&mut self, target: &'a dyn Item) {
            self.node.set_target(target);
        }
        fn target(&self) -> Option<&'a dyn Item> {
            self.node.target()
        }
        fn focus(&self) -> Option<&'a dyn Item> {
            self.node.focus()
        }
        fn idx(&mut self, idx: Idx) {
            self.node.idx(idx);
        }
        fn up(&mut self) -> bool {
            self.node.up()
        }
        fn down(&mut self) -> bool {
            self.node.down()
        }
        fn left(&mut self) -> bool {
            self.lefts += 1;
            self.node.left()
        }
        fn right(&mut self) -> bool {
            self.rights += 1;
            self.node.right()
        }
        fn enter(&mut self) -> bool {
            self.enters += 1;
            false
        }
        fn esc(&mut self) -> bool {
            self.escs += 1;
            false
        }
    }

    fn is(a: Option<&dyn Item>, b: &dyn Item) -> bool {
        same_item(a, Some(b))
    }

    #[test]
    #[should_panic(expected = "navigable inner layer")]
    fn test_requires_navigable_inner() {
        let inner = Recorder::default();
        let _ = ItemNav::new(inner);
    }

    #[test]
    fn test_enter_captures_field() {
        let plain = Probe::default();
        let field = Probe::field();
        let panel = Panel::new(vec![&plain, &field]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);

        assert!(is(nav.focus(), &panel));

        // Plain item: nothing captured
        assert!(!nav.enter());
        assert!(nav.focused().is_none());

        nav.up();
        assert!(!nav.enter());
        assert!(is(nav.focus(), &field));
        // Capture does not call the field itself, but the inner enter still runs
        assert_eq!(field.enters.get(), 0);
        assert_eq!(nav.inner().enters, 2);
    }

    #[test]
    fn test_focused_field_consumes_enter() {
        let field = Probe::field();
        let panel = Panel::new(vec![&field]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);
        nav.enter();

        field.enter_result.set(true);
        assert!(nav.enter());
        assert_eq!(field.enters.get(), 1);
        assert!(is(nav.focus(), &field));
        assert_eq!(nav.inner().enters, 1);
    }

    #[test]
    fn test_declined_enter_releases_field() {
        let field = Probe::field();
        let panel = Panel::new(vec![&field]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);
        nav.enter();

        assert!(!nav.enter());
        assert_eq!(field.enters.get(), 1);
        assert!(is(nav.focus(), &panel));
        assert_eq!(nav.inner().enters, 2);
    }

    #[test]
    fn test_up_down_go_to_field() {
        let a = Probe::field();
        let b = Probe::default();
        let panel = Panel::new(vec![&a, &b]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);
        nav.enter();

        assert!(nav.up());
        assert!(nav.down());
        assert!(nav.up());
        assert_eq!(a.ups.get(), 2);
        assert_eq!(a.downs.get(), 1);
        assert_eq!(nav.pos(), 0);
    }

    #[test]
    fn test_up_down_without_focus_move_selection() {
        let a = Probe::default();
        let b = Probe::default();
        let panel = Panel::new(vec![&a, &b]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);

        assert!(nav.up());
        assert_eq!(nav.pos(), 1);
        assert!(!nav.up());
        assert!(nav.down());
        assert_eq!(nav.pos(), 0);
    }

    #[test]
    fn test_esc_always_consumed_while_focused() {
        let field = Probe::field();
        let panel = Panel::new(vec![&field]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);
        nav.enter();

        // Field keeps focus
        assert!(nav.esc());
        assert!(is(nav.focus(), &field));

        // Field lets go
        field.esc_result.set(true);
        assert!(nav.esc());
        assert!(is(nav.focus(), &panel));
        assert_eq!(field.escs.get(), 2);
        assert_eq!(nav.inner().escs, 0);

        // Unfocused esc reaches the inner layer
        assert!(!nav.esc());
        assert_eq!(nav.inner().escs, 1);
    }

    #[test]
    fn test_left_right_release_and_page_target() {
        let field = Probe::field();
        let panel = Panel::new(vec![&field]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);
        nav.enter();

        // Leaving always validates, whatever the field answers
        field.enter_result.set(true);
        assert!(nav.left());
        assert_eq!(field.enters.get(), 1);
        assert!(is(nav.focus(), &panel));
        assert_eq!(panel.lefts.get(), 1);

        nav.enter();
        assert!(nav.right());
        assert_eq!(field.enters.get(), 2);
        assert!(is(nav.focus(), &panel));
        assert_eq!(panel.rights.get(), 1);

        // Never the inner layer's up/down alias
        assert_eq!(nav.inner().lefts, 0);
        assert_eq!(nav.inner().rights, 0);
        assert_eq!(nav.pos(), 0);
    }

    #[test]
    fn test_left_right_unfocused_page_target() {
        let a = Probe::default();
        let b = Probe::default();
        let panel = Panel::new(vec![&a, &b]);
        let mut nav = ItemNav::new(Recorder::new());
        nav.set_target(&panel);

        assert!(nav.right());
        assert!(nav.left());
        assert_eq!(panel.rights.get(), 1);
        assert_eq!(panel.lefts.get(), 1);
        assert_eq!(nav.pos(), 0);
        assert_eq!(a.enters.get(), 0);
    }

    #[test]
    fn test_unbound_commands() {
        let mut nav = ItemNav::new(NavNode::new());
        assert!(nav.focus().is_none());
        assert!(!nav.up());
        assert!(!nav.down());
        assert!(!nav.left());
        assert!(!nav.right());
        assert!(!nav.enter());
        assert!(!nav.esc());
        assert_eq!(nav.pos(), 0);
    }

    #[test]
    fn test_can_nav() {
        let field = Probe::field();
        let panel = Panel::new(vec![&field]);
        let mut nav = ItemNav::new(NavNode::new());
        assert!(nav.can_nav());
        assert!(!nav.shared_nav());
        nav.set_target(&panel);
        nav.enter();
        assert!(nav.can_nav());
    }
}
