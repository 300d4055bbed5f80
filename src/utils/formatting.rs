//! Formatting utilities used for CLI, PDF and export outputs.

/// Text form of the missing-value sentinel.
pub const MISSING: &str = "nan";

/// Natural text form of a float: shortest round-trip digits, always with a
/// decimal part for whole numbers (`1.0`, not `1`).
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return MISSING.to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let s = v.to_string();
    if s.contains('.') || s.contains('e') {
        s
    } else {
        format!("{s}.0")
    }
}

/// Like [`format_float`], with the sentinel text for missing values.
pub fn format_optional(v: Option<f64>) -> String {
    v.map(format_float).unwrap_or_else(|| MISSING.to_string())
}
