use super::*;

#[test]
fn new_tree_has_empty_root() {
    let tree = ElementTree::new("section");
    let root = tree.root();

    assert_eq!(tree.element(root).tag, "section");
    assert!(tree.children(root).is_empty());
}

#[test]
fn default_root_is_div() {
    let tree = ElementTree::default();
    assert_eq!(tree.element(tree.root()).tag, "div");
}

#[test]
fn create_child_appends_in_order() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    let a = tree.create_child(root, "span");
    let b = tree.create_child(root, "span");

    assert_eq!(tree.children(root), &[a, b]);
    assert_ne!(a, b);
}

#[test]
fn add_class_is_idempotent() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    tree.add_class(root, "segment-bar");
    tree.add_class(root, "segment-bar");
    tree.add_class(root, "wide");

    assert_eq!(tree.element(root).classes, vec!["segment-bar", "wide"]);
}

#[test]
fn set_style_replaces_and_keeps_order() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    tree.set_style(root, "width", "100%");
    tree.set_style(root, "height", "60px");
    tree.set_style(root, "width", "50%");

    let element = tree.element(root);
    assert_eq!(element.style("width"), Some("50%"));
    assert_eq!(element.style_text(), "width: 50%; height: 60px");
}

#[test]
fn set_text_and_attribute() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    tree.set_text(root, "hello");
    tree.set_attribute(root, "title", "greeting");

    let element = tree.element(root);
    assert_eq!(element.text.as_deref(), Some("hello"));
    assert_eq!(element.attribute("title"), Some("greeting"));
    assert_eq!(element.attribute("missing"), None);
}

#[test]
fn clear_children_detaches() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    let child = tree.create_child(root, "div");
    tree.add_class(child, "item");

    tree.clear_children(root);

    assert!(tree.children(root).is_empty());
    assert!(tree.find_by_class("item").is_empty());
}

#[test]
fn find_by_class_walks_document_order() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    let first = tree.create_child(root, "div");
    let nested = tree.create_child(first, "span");
    let second = tree.create_child(root, "div");
    for id in [first, nested, second] {
        tree.add_class(id, "hit");
    }

    assert_eq!(tree.find_by_class("hit"), vec![first, nested, second]);
}

#[test]
fn child_text_finds_first_matching_child() {
    let mut tree = ElementTree::default();
    let root = tree.root();
    let label = tree.create_child(root, "span");
    tree.add_class(label, "label");
    tree.set_text(label, "42%");

    assert_eq!(tree.child_text(root, "label"), Some("42%"));
    assert_eq!(tree.child_text(root, "other"), None);
}
