//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Money-like amount with two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Ratio as a percentage; negative values are raw costs and carry no `%`.
pub fn format_ratio(value: f64) -> String {
    if value < 0.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.2}%", value)
    }
}
