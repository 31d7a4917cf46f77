//! Number-to-text conversions shared by the percentage and locale formatters.
//!
//! `to_fixed` rounds on the exact binary value of the input and breaks exact
//! decimal ties away from zero, as `toFixed` does. Rust's `{:.N}` formatting
//! breaks ties to even, so ties are detected and bumped by hand.
//!
//! Locale labels round the shortest round-trip decimal string instead, half
//! away from zero, which is what `toLocaleString` does.

/// Extra digits requested when probing for an exact decimal tie.
///
/// Any `f64` that is not an exact tie differs from one within this many digits.
const TIE_PROBE_DIGITS: usize = 40;

/// Plain decimal notation covers magnitudes in `EXPONENT_MIN..EXPONENT_MAX`.
const EXPONENT_MIN: f64 = 1e-6;
const EXPONENT_MAX: f64 = 1e21;

/// Format a finite, non-negative value with exactly `digits` fraction digits.
pub(crate) fn fixed_abs(value: f64, digits: usize) -> String {
    debug_assert!(value.is_finite());
    let value = value.abs();

    let probe = format!("{:.*}", digits + TIE_PROBE_DIGITS, value);
    let (head, tail) = probe.split_at(probe.len() - TIE_PROBE_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if !is_tie {
        return format!("{value:.digits$}");
    }

    let head = head.strip_suffix('.').unwrap_or(head);
    increment_last_digit(head)
}

/// Round the shortest decimal form of a finite value to at most `digits`
/// fraction digits, half away from zero. The sign is dropped.
pub(crate) fn shortest_rounded_abs(value: f64, digits: usize) -> String {
    debug_assert!(value.is_finite());
    let shortest = format!("{}", value.abs());
    let Some((int_part, fraction)) = shortest.split_once('.') else {
        return shortest;
    };
    if fraction.len() <= digits {
        return shortest;
    }

    let kept = if digits == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &fraction[..digits])
    };
    if fraction.as_bytes()[digits] >= b'5' {
        increment_last_digit(&kept)
    } else {
        kept
    }
}

/// Add one unit in the last place to a decimal string such as `"9.99"`.
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;

    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => {}
            b'9' => *byte = b'0',
            digit => {
                *byte = digit + 1;
                carry = false;
            }
        }
    }

    let mut result = String::with_capacity(bytes.len() + 1);
    if carry {
        result.push('1');
    }
    // Only ASCII digits and '.' were touched.
    result.push_str(&String::from_utf8_lossy(&bytes));
    result
}

/// `Number.prototype.toFixed` semantics.
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return format_js_number(value);
    }

    let magnitude = fixed_abs(value, digits);
    if value < 0.0 {
        format!("-{magnitude}")
    } else {
        magnitude
    }
}

/// Default textual form of a number, as produced by string interpolation.
///
/// Magnitudes below `1e-6` or from `1e21` up switch to exponent form.
#[must_use]
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(EXPONENT_MIN..EXPONENT_MAX).contains(&magnitude) {
        let scientific = format!("{value:e}");
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => scientific,
        };
    }
    format!("{value}")
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
