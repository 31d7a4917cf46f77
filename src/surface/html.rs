//! HTML serialization for [`ElementTree`].

use std::fmt::Write;

use super::tree::ElementTree;
use super::{NodeId, Surface};

const INDENT: &str = "    ";

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl ElementTree {
    /// Serialize the tree reachable from the root as indented HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        self.write_node(&mut output, self.root(), 0);
        output
    }

    fn write_node(&self, output: &mut String, id: NodeId, depth: usize) {
        let element = self.element(id);
        let indent = INDENT.repeat(depth);

        let _ = write!(output, "{indent}<{}", element.tag);
        if !element.classes.is_empty() {
            let _ = write!(
                output,
                r#" class="{}""#,
                html_escape(&element.classes.join(" "))
            );
        }
        if !element.styles.is_empty() {
            let _ = write!(output, r#" style="{}""#, html_escape(&element.style_text()));
        }
        for (name, value) in &element.attributes {
            let _ = write!(output, r#" {name}="{}""#, html_escape(value));
        }
        output.push('>');

        let text = element.text.as_deref().map(html_escape).unwrap_or_default();

        if element.children.is_empty() {
            let _ = writeln!(output, "{text}</{}>", element.tag);
            return;
        }

        output.push('\n');
        if !text.is_empty() {
            let _ = writeln!(output, "{indent}{INDENT}{text}");
        }
        for &child in &element.children {
            self.write_node(output, child, depth + 1);
        }
        let _ = writeln!(output, "{indent}</{}>", element.tag);
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
