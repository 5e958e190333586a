//! Formatting utilities used for CLI and export outputs. Rounding lives
//! here, at the presentation boundary; the core never rounds.

/// Two-decimal display string, e.g. `4` -> "4.00".
pub fn fmt2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn fmt2_opt(v: Option<f64>) -> String {
    v.map(fmt2).unwrap_or_default()
}
