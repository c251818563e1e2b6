//! Numeric operand extraction

use regex::Regex;
use std::sync::LazyLock;

/// Unsigned decimal: digits with an optional fractional part
static NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

/// Extract every unsigned decimal number in the text, left to right
///
/// Signs, exponents, thousands separators and spelled-out numbers are not
/// recognized: "-5" yields `5`, "1,000" yields `1` and `0`.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_REGEX
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Format a value the way it is spoken: shortest decimal form, no trailing `.0`
#[must_use]
#[allow(clippy::float_cmp)]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}
