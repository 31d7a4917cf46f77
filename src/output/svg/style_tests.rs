//! Tests for SVG styling primitives.

use super::*;

mod chart_color_tests {
    use super::*;

    #[test]
    fn css_var_format() {
        assert_eq!(ChartColor::css_var("text-muted").to_css(), "var(--color-text-muted)");
    }

    #[test]
    fn literal_format() {
        assert_eq!(ChartColor::literal("#ffd6e0").to_css(), "#ffd6e0");
        assert_eq!(
            ChartColor::literal("rgb(1, 2, 3)").to_css(),
            "rgb(1, 2, 3)"
        );
    }
}

mod text_anchor_tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", TextAnchor::Start), "start");
        assert_eq!(format!("{}", TextAnchor::Middle), "middle");
        assert_eq!(format!("{}", TextAnchor::End), "end");
    }

    #[test]
    fn default_is_start() {
        assert!(matches!(TextAnchor::default(), TextAnchor::Start));
    }
}
