//! Fallback colors for segments without an explicit color.

use crate::error::{Result, SegmentBarError};

/// Built-in pastel palette, cycled in this order.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#ffd6e0", // light pink
    "#ffe9d6", // peach
    "#fff7c2", // light yellow
    "#d9f8c4", // mint green
    "#cde8ff", // light blue
    "#e6d3ff", // lavender
    "#d3f3ff", // aqua
    "#f9d5ff", // light magenta
    "#e9ecef", // very light grey-blue
    "#f3ffe3", // pale lime
];

/// Ordered, non-empty list of fallback colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Palette {
    /// Create a palette from custom colors.
    ///
    /// # Errors
    /// Returns an error if `colors` is empty.
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(SegmentBarError::Config(
                "palette must contain at least one color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Start a fresh cycle at the first color.
    #[must_use]
    pub fn cycle(&self) -> ColorCycle<'_> {
        ColorCycle {
            colors: &self.colors,
            index: 0,
        }
    }
}

/// Round-robin cursor over a palette.
///
/// Created per render call, so every bar starts from the first color.
#[derive(Debug, Clone)]
pub struct ColorCycle<'a> {
    colors: &'a [String],
    index: usize,
}

impl<'a> ColorCycle<'a> {
    /// Return the current color and advance, wrapping after the last one.
    pub fn next_color(&mut self) -> &'a str {
        let color = &self.colors[self.index];
        self.index = (self.index + 1) % self.colors.len();
        color
    }

    /// Index of the color the next call will return.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for ColorCycle<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_color())
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
