//! Percentage normalization and the label prettification rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::datum::SegmentDatum;
use super::number::{format_js_number, to_fixed};

/// How to normalize when the values sum to zero (empty or all-zero data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroTotalPolicy {
    /// Every segment gets a 0 share.
    #[default]
    ZeroWidth,
    /// Divide anyway and let `NaN` flow into widths and labels.
    Propagate,
}

impl FromStr for ZeroTotalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero-width" | "zero" => Ok(Self::ZeroWidth),
            "propagate" | "nan" => Ok(Self::Propagate),
            _ => Err(format!("Unknown zero-total policy: {s}")),
        }
    }
}

impl fmt::Display for ZeroTotalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "zero-width"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

/// Sum of all segment values.
#[must_use]
pub fn segment_sum(data: &[SegmentDatum]) -> f64 {
    data.iter().map(|d| d.value).sum()
}

/// Each value's share of the total, in input order.
#[must_use]
pub fn segment_percentages(data: &[SegmentDatum], policy: ZeroTotalPolicy) -> Vec<f64> {
    let sum = segment_sum(data);

    if sum == 0.0 && policy == ZeroTotalPolicy::ZeroWidth {
        return vec![0.0; data.len()];
    }

    data.iter().map(|d| d.value / sum).collect()
}

/// Result of [`prettify_segment_percentage`].
///
/// Whole percentages collapse to a plain number; everything else keeps its
/// two-decimal text.
#[derive(Debug, Clone, PartialEq)]
pub enum PrettyPercentage {
    Whole(f64),
    Fixed(String),
}

impl fmt::Display for PrettyPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(n) => f.write_str(&format_js_number(*n)),
            Self::Fixed(s) => f.write_str(s),
        }
    }
}

/// Format a 0–100 percentage for a segment label.
///
/// The value is fixed to two decimals. Only when both fraction digits are `0`
/// does it collapse to the integer part, so `7.50` stays `"7.50"`.
#[must_use]
pub fn prettify_segment_percentage(percentage: f64) -> PrettyPercentage {
    let pretty = to_fixed(percentage, 2);

    let Some((int_part, fraction)) = pretty.split_once('.') else {
        // NaN / Infinity have no fraction
        return PrettyPercentage::Whole(percentage);
    };

    let mut digits = fraction.chars();
    if digits.next() == Some('0') && digits.next() == Some('0') {
        let whole = int_part.parse::<f64>().unwrap_or(f64::NAN);
        PrettyPercentage::Whole(whole)
    } else {
        PrettyPercentage::Fixed(pretty)
    }
}

#[cfg(test)]
#[path = "percent_tests.rs"]
mod tests;
