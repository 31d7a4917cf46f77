use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(html_escape("1,234 views"), "1,234 views");
    }
}

mod to_html_tests {
    use super::*;

    #[test]
    fn empty_root() {
        let tree = ElementTree::default();
        assert_eq!(tree.to_html(), "<div></div>\n");
    }

    #[test]
    fn root_with_class_and_style() {
        let mut tree = ElementTree::default();
        let root = tree.root();
        tree.add_class(root, "segment-bar");
        tree.set_style(root, "width", "100%");

        assert_eq!(
            tree.to_html(),
            "<div class=\"segment-bar\" style=\"width: 100%\"></div>\n"
        );
    }

    #[test]
    fn nested_children_are_indented() {
        let mut tree = ElementTree::default();
        let root = tree.root();
        let child = tree.create_child(root, "div");
        let span = tree.create_child(child, "span");
        tree.set_text(span, "50%");

        let html = tree.to_html();
        assert_eq!(
            html,
            "<div>\n    <div>\n        <span>50%</span>\n    </div>\n</div>\n"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let mut tree = ElementTree::default();
        let root = tree.root();
        tree.set_text(root, "<script>");
        tree.set_attribute(root, "title", "Tom \"T\" & Co");

        let html = tree.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"title="Tom &quot;T&quot; &amp; Co""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn detached_children_are_not_serialized() {
        let mut tree = ElementTree::default();
        let root = tree.root();
        let child = tree.create_child(root, "span");
        tree.set_text(child, "gone");
        tree.clear_children(root);

        assert!(!tree.to_html().contains("gone"));
    }
}
