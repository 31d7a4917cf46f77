//! Segmented horizontal bar: percentage normalization, color cycling,
//! value labels and rendering into a [`Surface`](crate::surface::Surface).

mod datum;
mod layout;
mod locale;
mod number;
mod palette;
mod percent;
mod renderer;

pub use datum::{DEFAULT_HEIGHT, DEFAULT_WIDTH, SegmentBarConfig, SegmentDatum};
pub use layout::{SegmentLayout, SegmentView, segment_tooltip};
pub use locale::Locale;
pub use number::{format_js_number, to_fixed};
pub use palette::{ColorCycle, DEFAULT_PALETTE, Palette};
pub use percent::{
    PrettyPercentage, ZeroTotalPolicy, prettify_segment_percentage, segment_percentages,
    segment_sum,
};
pub use renderer::{
    CLASS_BAR, CLASS_ITEM, CLASS_PERCENTAGE, CLASS_SMALL, CLASS_TITLE, CLASS_VALUE,
    DEFAULT_SMALL_THRESHOLD, MountMode, SegmentBarRenderer, build_segment_bar, mount_layout,
};
