//! Locale-aware value labels with thousands grouping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::number::shortest_rounded_abs;

/// Maximum fraction digits shown in value labels.
const MAX_FRACTION_DIGITS: usize = 3;

/// Number formatting locale for segment value labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
    #[serde(rename = "es-ES")]
    EsEs,
    #[serde(rename = "de-CH")]
    DeCh,
    /// No grouping, `.` decimal separator.
    #[serde(rename = "plain")]
    Plain,
}

impl Locale {
    pub const ALL: [Self; 7] = [
        Self::EnUs,
        Self::EnGb,
        Self::DeDe,
        Self::FrFr,
        Self::EsEs,
        Self::DeCh,
        Self::Plain,
    ];

    /// BCP 47 style tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::EsEs => "es-ES",
            Self::DeCh => "de-CH",
            Self::Plain => "plain",
        }
    }

    const fn group_separator(self) -> Option<&'static str> {
        match self {
            Self::EnUs | Self::EnGb => Some(","),
            Self::DeDe | Self::EsEs => Some("."),
            Self::FrFr => Some("\u{202f}"),
            Self::DeCh => Some("\u{2019}"),
            Self::Plain => None,
        }
    }

    const fn decimal_separator(self) -> &'static str {
        match self {
            Self::DeDe | Self::FrFr | Self::EsEs => ",",
            Self::EnUs | Self::EnGb | Self::DeCh | Self::Plain => ".",
        }
    }

    /// Smallest integer-digit count that gets grouped.
    const fn min_grouping_digits(self) -> usize {
        match self {
            // Spanish leaves four-digit numbers ungrouped
            Self::EsEs => 5,
            _ => 4,
        }
    }

    /// Format a value with grouping and up to three fraction digits.
    #[must_use]
    pub fn format_value(self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let fixed = shortest_rounded_abs(value, MAX_FRACTION_DIGITS);
        let (int_part, fraction) = fixed.split_once('.').unwrap_or((&fixed, ""));
        let fraction = fraction.trim_end_matches('0');

        let mut output = String::with_capacity(fixed.len() + 4);
        if value < 0.0 {
            output.push('-');
        }
        output.push_str(&self.group_integer(int_part));
        if !fraction.is_empty() {
            output.push_str(self.decimal_separator());
            output.push_str(fraction);
        }
        output
    }

    fn group_integer(self, digits: &str) -> String {
        let Some(separator) = self.group_separator() else {
            return digits.to_string();
        };
        if digits.len() < self.min_grouping_digits() {
            return digits.to_string();
        }

        let mut grouped =
            String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('_', "-").to_lowercase();
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().to_lowercase() == normalized)
            .or_else(|| match normalized.as_str() {
                "en" => Some(Self::EnUs),
                "de" => Some(Self::DeDe),
                "fr" => Some(Self::FrFr),
                "es" => Some(Self::EsEs),
                "ch" => Some(Self::DeCh),
                "none" => Some(Self::Plain),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown locale: {s}"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
#[path = "locale_tests.rs"]
mod tests;
