//! Numeric text helpers.

/// Render a value as fixed-point text with exactly three decimals. A clamped
/// zero renders as "0.000", never null; callers keep null values null.
pub fn fixed3(value: f64) -> String {
    format!("{value:.3}")
}

/// Left-pad a numeric text value with zeros to `width`. Values already at or
/// beyond the width pass through unchanged.
pub fn zero_pad(value: &str, width: usize) -> String {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len >= width {
        trimmed.to_string()
    } else {
        let mut out = String::with_capacity(width);
        for _ in 0..(width - len) {
            out.push('0');
        }
        out.push_str(trimmed);
        out
    }
}

/// Parse a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
