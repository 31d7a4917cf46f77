//! Segment bar renderer: data in, proportional segments out.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::surface::Surface;

use super::datum::SegmentBarConfig;
use super::layout::{SegmentLayout, SegmentView, segment_tooltip};
use super::locale::Locale;
use super::palette::Palette;
use super::percent::{
    ZeroTotalPolicy, prettify_segment_percentage, segment_percentages, segment_sum,
};

/// Segments narrower than this (in percent) get the small marker class.
pub const DEFAULT_SMALL_THRESHOLD: f64 = 5.0;

pub const CLASS_BAR: &str = "segment-bar";
pub const CLASS_ITEM: &str = "segment-item-wrapper";
pub const CLASS_SMALL: &str = "segment-small";
pub const CLASS_PERCENTAGE: &str = "segment-item-percentage";
pub const CLASS_VALUE: &str = "segment-item-value";
pub const CLASS_TITLE: &str = "segment-item-title";

/// What happens to existing children of the mounting element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MountMode {
    /// Keep existing children; repeated renders accumulate segments.
    #[default]
    Append,
    /// Remove existing children before rendering.
    Replace,
}

impl FromStr for MountMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" => Ok(Self::Append),
            "replace" => Ok(Self::Replace),
            _ => Err(format!("Unknown mount mode: {s}")),
        }
    }
}

impl fmt::Display for MountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

/// Render options. The renderer holds no per-call state.
#[derive(Debug, Clone)]
pub struct SegmentBarRenderer {
    palette: Palette,
    locale: Locale,
    small_threshold: f64,
    zero_total: ZeroTotalPolicy,
    mount: MountMode,
}

impl Default for SegmentBarRenderer {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            locale: Locale::default(),
            small_threshold: DEFAULT_SMALL_THRESHOLD,
            zero_total: ZeroTotalPolicy::default(),
            mount: MountMode::default(),
        }
    }
}

impl SegmentBarRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn with_small_threshold(mut self, threshold: f64) -> Self {
        self.small_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_zero_total(mut self, policy: ZeroTotalPolicy) -> Self {
        self.zero_total = policy;
        self
    }

    #[must_use]
    pub const fn with_mount(mut self, mount: MountMode) -> Self {
        self.mount = mount;
        self
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn small_threshold(&self) -> f64 {
        self.small_threshold
    }

    #[must_use]
    pub const fn zero_total(&self) -> ZeroTotalPolicy {
        self.zero_total
    }

    #[must_use]
    pub const fn mount(&self) -> MountMode {
        self.mount
    }

    /// Compute percentages and resolve every segment.
    ///
    /// Writes each datum's `percent` back into `config`, overwriting whatever
    /// was there.
    pub fn layout(&self, config: &mut SegmentBarConfig) -> SegmentLayout {
        let total = segment_sum(&config.data);
        let percentages = segment_percentages(&config.data, self.zero_total);
        for (datum, percent) in config.data.iter_mut().zip(&percentages) {
            datum.percent = *percent;
        }

        let mut colors = self.palette.cycle();
        let segments = config
            .data
            .iter()
            .enumerate()
            .map(|(index, datum)| {
                let width_percent = datum.percent * 100.0;
                let color = datum
                    .explicit_color()
                    .map_or_else(|| colors.next_color().to_string(), ToString::to_string);
                let title = datum.display_title().map(ToString::to_string);
                let tooltip = title.as_deref().map(|t| segment_tooltip(t, datum.value));

                SegmentView {
                    index,
                    value: datum.value,
                    percent: datum.percent,
                    width_percent,
                    color,
                    small: width_percent < self.small_threshold,
                    percentage_label: format!("{}%", prettify_segment_percentage(width_percent)),
                    value_label: self.locale.format_value(datum.value),
                    title,
                    tooltip,
                }
            })
            .collect();

        debug!(
            "Laid out {} segments (total {total}, zero policy {})",
            config.data.len(),
            self.zero_total
        );

        SegmentLayout {
            width: config.resolved_width().to_string(),
            height: config.resolved_height().to_string(),
            total,
            segments,
        }
    }

    /// Populate `surface` with the bar described by `config`.
    ///
    /// Never fails; degenerate input shows up in the output instead.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, config: &mut SegmentBarConfig) {
        let layout = self.layout(config);
        mount_layout(surface, &layout, self.mount);
    }
}

/// Write a resolved layout into a surface.
pub fn mount_layout<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &SegmentLayout,
    mount: MountMode,
) {
    let root = surface.root();

    if mount == MountMode::Replace {
        surface.clear_children(root);
    }

    surface.set_style(root, "width", &layout.width);
    surface.set_style(root, "height", &layout.height);
    surface.add_class(root, CLASS_BAR);

    for segment in &layout.segments {
        let item = surface.create_child(root, "div");

        surface.set_style(item, "width", &segment.width_style());
        if segment.small {
            surface.add_class(item, CLASS_SMALL);
        }
        surface.set_style(item, "background-color", &segment.color);
        surface.add_class(item, CLASS_ITEM);

        if let (Some(title), Some(tooltip)) = (&segment.title, &segment.tooltip) {
            let title_span = surface.create_child(item, "span");
            surface.set_text(title_span, title);
            surface.add_class(title_span, CLASS_TITLE);
            surface.set_attribute(item, "title", tooltip);
        }

        let percentage_span = surface.create_child(item, "span");
        surface.set_text(percentage_span, &segment.percentage_label);
        surface.add_class(percentage_span, CLASS_PERCENTAGE);

        let value_span = surface.create_child(item, "span");
        surface.set_text(value_span, &segment.value_label);
        surface.add_class(value_span, CLASS_VALUE);

        trace!(
            "Segment {} -> {} {}",
            segment.index,
            segment.width_style(),
            segment.color
        );
    }
}

/// Render with default options.
pub fn build_segment_bar<S: Surface + ?Sized>(surface: &mut S, config: &mut SegmentBarConfig) {
    SegmentBarRenderer::default().render(surface, config);
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
