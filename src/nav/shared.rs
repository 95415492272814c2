//! Shared navigation - several chains, one cursor.
//!
//! Provides all navigation info for the composed chain but redirects every
//! call to a common navigation object. Output pipelines built on different
//! devices stay in sync because none of them owns any cursor state.

use std::cell::RefCell;

use super::Nav;
use crate::item::Item;
use crate::types::Idx;

/// Stateless forwarder to an externally owned navigation chain.
///
/// Bound once at construction. Calls borrow the shared `RefCell` for their
/// duration, so an item hook that re-enters the same shared chain panics.
pub struct SharedNav<'n, N> {
    nav: &'n RefCell<N>,
}

impl<'n, N> SharedNav<'n, N> {
    pub fn new(nav: &'n RefCell<N>) -> Self {
        Self { nav }
    }

    /// The shared chain this forwarder is bound to.
    pub fn shared(&self) -> &'n RefCell<N> {
        self.nav
    }
}

impl<N> Clone for SharedNav<'_, N> {
    fn clone(&self) -> Self {
        Self { nav: self.nav }
    }
}

impl<'a, N: Nav<'a>> Nav<'a> for SharedNav<'_, N> {
    fn can_nav(&self) -> bool {
        self.nav.borrow().can_nav()
    }

    fn shared_nav(&self) -> bool {
        true
    }

    fn pos(&self) -> Idx {
        self.nav.borrow().pos()
    }

    fn selected(&self, idx: Idx) -> bool {
        self.nav.borrow().selected(idx)
    }

    fn set_target(&mut self, target: &'a dyn Item) {
        self.nav.borrow_mut().set_target(target);
    }

    fn target(&self) -> Option<&'a dyn Item> {
        self.nav.borrow().target()
    }

    fn focus(&self) -> Option<&'a dyn Item> {
        self.nav.borrow().focus()
    }

    fn idx(&mut self, idx: Idx) {
        self.nav.borrow_mut().idx(idx);
    }

    fn down(&mut self) -> bool {
        self.nav.borrow_mut().down()
    }

    fn up(&mut self) -> bool {
        self.nav.borrow_mut().up()
    }

    fn left(&mut self) -> bool {
        self.nav.borrow_mut().left()
    }

    fn right(&mut self) -> bool {
        self.nav.borrow_mut().right()
    }

    fn enter(&mut self) -> bool {
        self.nav.borrow_mut().enter()
    }

    fn esc(&mut self) -> bool {
        self.nav.borrow_mut().esc()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::same_item;
    use crate::nav::fixtures::{Panel, Probe};
    use crate::nav::{ItemNav, NavNode};

    #[test]
    fn test_two_chains_one_cursor() {
        let items: Vec<Probe> = (0..3).map(|_| Probe::default()).collect();
        let panel = Panel::new(items.iter().collect());
        let nav = RefCell::new(NavNode::new());

        let mut lcd = SharedNav::new(&nav);
        let mut serial = SharedNav::new(&nav);
        lcd.set_target(&panel);

        assert!(lcd.up());
        assert_eq!(serial.pos(), 1);
        assert!(serial.up());
        assert_eq!(lcd.pos(), 2);
        assert!(!lcd.up());
        assert!(serial.down());
        assert_eq!(lcd.pos(), serial.pos());
        assert!(lcd.selected(1));
        assert!(serial.selected(1));

        serial.idx(0);
        assert_eq!(nav.borrow().pos(), 0);
    }

    #[test]
    fn test_shared_focus() {
        let a = Probe::default();
        let field = Probe::field();
        let panel = Panel::new(vec![&a, &field]);
        let nav = RefCell::new(ItemNav::new(NavNode::new()));

        let mut lcd = SharedNav::new(&nav);
        let mut serial = lcd.clone();
        serial.set_target(&panel);

        lcd.up();
        lcd.enter();
        assert!(same_item(serial.focus(), Some(&field as &dyn Item)));
        assert!(serial.up());
        assert_eq!(field.ups.get(), 1);

        field.esc_result.set(true);
        assert!(serial.esc());
        assert!(same_item(lcd.focus(), Some(&panel as &dyn Item)));
    }

    #[test]
    fn test_forwarding_flags() {
        let nav = RefCell::new(NavNode::new());
        let shared = SharedNav::new(&nav);
        assert!(shared.shared_nav());
        assert!(shared.can_nav());
        assert!(shared.target().is_none());
        assert!(std::ptr::eq(shared.shared(), &nav));
    }
}
