//! Mounting surfaces the segment bar renders into.
//!
//! A surface is any retained element tree that can grow children and carry
//! text, attributes, classes and inline styles. [`ElementTree`] is the
//! headless implementation used for HTML output and tests.

mod html;
mod tree;

pub use html::html_escape;
pub use tree::{Element, ElementTree};

use serde::Serialize;

/// Handle to an element owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Capabilities a host element tree must provide.
pub trait Surface {
    /// The mounting element itself.
    fn root(&self) -> NodeId;

    /// Append a new `tag` element as the last child of `parent`.
    fn create_child(&mut self, parent: NodeId, tag: &str) -> NodeId;

    /// Replace the text content of `node`.
    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Add a class; adding one that is already present is a no-op.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Set one inline style property, replacing any previous value.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Detach every child of `node`.
    fn clear_children(&mut self, node: NodeId);
}
