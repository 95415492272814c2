//! Plain text menu renderer.
//!
//! Output is one line per item, optionally preceded by the title line:
//!
//! ```text
//! Main
//! > Info
//!   Volume: 5
//! ```
//!
//! The cursor column shows `>` on the selection and `*` when the selected
//! item holds the input focus.

use std::fmt::{self, Write};

use crate::item::same_item;
use crate::nav::Nav;
use crate::types::Tag;

/// Renders the chain's target collection as text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    parts: Tag,
}

impl TextRenderer {
    /// Renderer emitting the given parts (`TITLE`, `CURSOR`, `INDEX`).
    pub const fn new(parts: Tag) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> Tag {
        self.parts
    }

    /// Render into any `fmt::Write`. Unbound chains print nothing.
    pub fn render<'a, N: Nav<'a> + ?Sized>(&self, nav: &N, out: &mut dyn Write) -> fmt::Result {
        let Some(target) = nav.target() else {
            return Ok(());
        };

        if self.parts.has(Tag::TITLE) {
            target.print(out)?;
            out.write_char('\n')?;
        }

        let focus = nav.focus();
        for idx in 0..target.size() {
            let Some(item) = target.get(idx) else {
                continue;
            };

            let mut prefixed = false;
            if self.parts.has(Tag::CURSOR) {
                let mark = if !nav.selected(idx) {
                    ' '
                } else if same_item(focus, Some(item)) {
                    '*'
                } else {
                    '>'
                };
                out.write_char(mark)?;
                prefixed = true;
            }
            if self.parts.has(Tag::INDEX) {
                write!(out, "{}.", idx + 1)?;
                prefixed = true;
            }
            if prefixed {
                out.write_char(' ')?;
            }

            item.print(out)?;
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Render into a fresh `String`.
    ///
    /// Fails when an item's `print` fails, instead of returning partial text.
    pub fn render_to_string<'a, N: Nav<'a> + ?Sized>(
        &self,
        nav: &N,
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.render(nav, &mut out)?;
        Ok(out)
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(Tag::TITLE | Tag::CURSOR)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemList, NumField, Prompt};
    use crate::nav::{ItemNav, NavNode, SharedNav};
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_unbound_prints_nothing() {
        let nav = NavNode::new();
        assert_eq!(TextRenderer::default().render_to_string(&nav).unwrap(), "");
    }

    #[test]
    fn test_default_layout() {
        let menu = ItemList::new("Main")
            .with(Prompt::new("Info"))
            .with(Prompt::new("About"));
        let mut nav = NavNode::new();
        nav.set_target(&menu);
        nav.up();

        assert_eq!(
            TextRenderer::default().render_to_string(&nav).unwrap(),
            "Main\n  Info\n> About\n"
        );
    }

    #[test]
    fn test_index_without_title() {
        let menu = ItemList::new("Main")
            .with(Prompt::new("Info"))
            .with(Prompt::new("About"));
        let nav = NavNode::with_target(&menu);

        let renderer = TextRenderer::new(Tag::CURSOR | Tag::INDEX);
        assert_eq!(renderer.render_to_string(&nav).unwrap(), ">1. Info\n 2. About\n");

        let bare = TextRenderer::new(Tag::NONE);
        assert_eq!(bare.render_to_string(&nav).unwrap(), "Info\nAbout\n");
    }

    #[test]
    fn test_focus_marker() {
        let volume = Cell::new(5);
        let menu = ItemList::new("Main").with(NumField::new("Volume", &volume, 0, 10, 1));
        let mut nav = ItemNav::new(NavNode::new());
        nav.set_target(&menu);

        let renderer = TextRenderer::new(Tag::CURSOR);
        assert_eq!(renderer.render_to_string(&nav).unwrap(), "> Volume: 5\n");
        nav.enter();
        nav.up();
        assert_eq!(renderer.render_to_string(&nav).unwrap(), "* Volume: 6\n");
    }

    /// Item whose text cannot be printed.
    struct Broken;

    impl Item for Broken {
        fn print(&self, _out: &mut dyn Write) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_print_failure_is_reported() {
        let menu = ItemList::new("Main")
            .with(Prompt::new("Info"))
            .with(Broken);
        let nav = NavNode::with_target(&menu);
        assert_eq!(TextRenderer::default().render_to_string(&nav), Err(fmt::Error));
    }

    #[test]
    fn test_shared_pipelines_match() {
        let menu = ItemList::new("Main")
            .with(Prompt::new("A"))
            .with(Prompt::new("B"))
            .with(Prompt::new("C"));
        let nav = RefCell::new(ItemNav::new(NavNode::new()));
        let mut lcd = SharedNav::new(&nav);
        let serial = SharedNav::new(&nav);
        lcd.set_target(&menu);
        lcd.up();

        let renderer = TextRenderer::default();
        let a = renderer.render_to_string(&lcd).unwrap();
        let b = renderer.render_to_string(&serial).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, "Main\n  A\n> B\n  C\n");
    }
}
