//! Arena-backed headless element tree.

use indexmap::IndexMap;

use super::{NodeId, Surface};

/// One element in an [`ElementTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    /// Inline style declarations in insertion order.
    pub styles: IndexMap<String, String>,
    /// Attributes other than `class` and `style`, in insertion order.
    pub attributes: IndexMap<String, String>,
    pub text: Option<String>,
    pub children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Serialized `style` attribute value, e.g. `width: 100%; height: 60px`.
    #[must_use]
    pub fn style_text(&self) -> String {
        self.styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Retained element tree with a single root.
///
/// Detached nodes stay in the arena but are unreachable from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTree {
    nodes: Vec<Element>,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new("div")
    }
}

impl ElementTree {
    /// Create a tree whose root is an empty `root_tag` element.
    #[must_use]
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![Element::new(root_tag)],
        }
    }

    /// # Panics
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.nodes[id.0]
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.element(id).children
    }

    /// All reachable elements carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.walk(self.root(), &mut |id, element| {
            if element.has_class(class) {
                found.push(id);
            }
        });
        found
    }

    /// Text of the first child of `parent` carrying `class`.
    #[must_use]
    pub fn child_text(&self, parent: NodeId, class: &str) -> Option<&str> {
        self.children(parent)
            .iter()
            .map(|&id| self.element(id))
            .find(|element| element.has_class(class))
            .and_then(|element| element.text.as_deref())
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(NodeId, &Element)) {
        let element = self.element(id);
        visit(id, element);
        for &child in &element.children {
            self.walk(child, visit);
        }
    }
}

impl Surface for ElementTree {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn create_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag));
        self.element_mut(parent).children.push(id);
        id
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.element_mut(node).text = Some(text.to_string());
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.element_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        let element = self.element_mut(node);
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.element_mut(node)
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn clear_children(&mut self, node: NodeId) {
        self.element_mut(node).children.clear();
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
