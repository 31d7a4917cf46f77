//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Fill color: a literal CSS color or a themeable CSS variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Any CSS color literal (e.g., "#ffd6e0", "rgb(1, 2, 3)")
    Literal(String),
    /// CSS variable reference (e.g., "text" → "var(--color-text)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a literal color.
    #[must_use]
    pub fn literal(color: &str) -> Self {
        Self::Literal(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Literal(c) => c.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
