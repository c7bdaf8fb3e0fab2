//! # Presentation Formatter
//!
//! Turns numbers into display strings. The same rule is applied to results
//! and to every number in a derivation trace, so two equations producing the
//! same value always display it identically.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::format::{format_value, INVALID_MARKER};
//!
//! assert_eq!(format_value(1234.5), "1234.5");
//! assert_eq!(format_value(0.000005), "5.0000e-6");
//! assert_eq!(format_value(f64::NAN), INVALID_MARKER);
//! ```

use crate::settings::FormatSettings;

/// Display string for NaN and infinities
pub const INVALID_MARKER: &str = "Invalid";

/// Format with the default [`FormatSettings`]
pub fn format_value(value: f64) -> String {
    format_value_with(value, &FormatSettings::default())
}

/// Format a number according to `settings`.
pub fn format_value_with(value: f64, settings: &FormatSettings) -> String {
    if !value.is_finite() {
        return INVALID_MARKER.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < settings.scientific_below || magnitude >= settings.scientific_at_or_above {
        return format!("{:.*e}", settings.scientific_digits, value);
    }

    let fixed = format!("{:.*}", settings.decimals, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a value followed by its unit symbol (no unit for dimensionless)
pub fn format_quantity(value: f64, unit: &str, settings: &FormatSettings) -> String {
    let number = format_value_with(value, settings);
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// Replace each `{name}` in `template` with `lookup(name)`.
///
/// Placeholders the lookup does not know are left as written.
pub fn substitute<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut output = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match lookup(name) {
                    Some(text) => output.push_str(&text),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                output.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    output.push_str(rest);
    output
}

/// Render trace lines as a numbered list
pub fn render_trace(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>2}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_band() {
        assert_eq!(format_value(1234.5), "1234.5");
        assert_eq!(format_value(2.87787), "2.8779");
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(-3.25), "-3.25");
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(999_999.0), "999999");
    }

    #[test]
    fn test_scientific_band() {
        assert_eq!(format_value(0.000005), "5.0000e-6");
        assert_eq!(format_value(1_000_000.0), "1.0000e6");
        assert_eq!(format_value(-2.5e-7), "-2.5000e-7");
        assert_eq!(format_value(299_792_458.0), "2.9979e8");
    }

    #[test]
    fn test_zero_and_invalid() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(f64::NAN), "Invalid");
        assert_eq!(format_value(f64::INFINITY), "Invalid");
        assert_eq!(format_value(f64::NEG_INFINITY), "Invalid");
    }

    #[test]
    fn test_custom_settings() {
        let settings = FormatSettings {
            decimals: 2,
            scientific_below: 1e-2,
            scientific_at_or_above: 1e3,
            scientific_digits: 2,
        };
        assert_eq!(format_value_with(3.14159, &settings), "3.14");
        assert_eq!(format_value_with(1234.5, &settings), "1.23e3");
        assert_eq!(format_value_with(0.005, &settings), "5.00e-3");
    }

    #[test]
    fn test_format_quantity() {
        let settings = FormatSettings::default();
        assert_eq!(format_quantity(2.878, "N", &settings), "2.878 N");
        assert_eq!(format_quantity(6.0, "", &settings), "6");
    }

    #[test]
    fn test_substitute() {
        let text = substitute("{F} / (0.5 × {rho})", |name| match name {
            "F" => Some("2.878 N".to_string()),
            "rho" => Some("1.225".to_string()),
            _ => None,
        });
        assert_eq!(text, "2.878 N / (0.5 × 1.225)");

        let untouched = substitute("{unknown} + {", |_| None);
        assert_eq!(untouched, "{unknown} + {");
    }

    #[test]
    fn test_render_trace() {
        let rendered = render_trace(&["a".to_string(), "b".to_string()]);
        assert_eq!(rendered, " 1. a\n 2. b");
    }
}
