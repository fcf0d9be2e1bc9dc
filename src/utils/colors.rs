/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Ratio color:
/// \<0 → red (labour cost with no sales)
/// 0 → grey
/// \>100 → yellow (labour exceeds sales)
/// otherwise green
pub fn color_for_ratio(value: f64) -> &'static str {
    if value < 0.0 {
        RED
    } else if value == 0.0 {
        GREY
    } else if value > 100.0 {
        YELLOW
    } else {
        GREEN
    }
}
