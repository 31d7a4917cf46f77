//! SVG rendering of segment bars.
//!
//! Provides building blocks for accessible, responsive SVG output:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration for label colors via `var(--color-*)`
//! - Accessibility: `<title>` elements for screen readers and hover tooltips

mod builder;
mod element;
mod segment_chart;
mod style;

pub use builder::SvgBuilder;
pub use element::{Label, Rect, SvgElement};
pub use segment_chart::{FALLBACK_HEIGHT, SegmentBarSvg, VIEWBOX_WIDTH};
pub use style::{ChartColor, TextAnchor};
