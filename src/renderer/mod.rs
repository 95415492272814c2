//! Menu renderer - turns a navigation chain into text.
//!
//! The renderer only reads the chain: target, selection and focus. Any number
//! of renderers can print the same chain, or separate [`crate::nav::SharedNav`]
//! forwarders of one shared chain, and they all show the same cursor.

pub mod text;

pub use text::TextRenderer;
