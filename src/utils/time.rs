//! Time utilities: parsing loose HH:MM strings and break notes into NaiveTime.
//!
//! Accepted clock formats: `9`, `09`, `9:30`, `9.30`, `21:15`. Break notes
//! are a single string holding both bounds, e.g. `"1.30PM-2PM"` or `"15-15.30"`.
//! AM/PM markers are dropped; a break that would start before its shift is
//! read as PM instead (see [`parse_break_notes`]).

use crate::errors::{AppError, AppResult};
use crate::models::BreakWindow;
use chrono::{NaiveTime, TimeDelta};
use tracing::trace;

/// Normalize a clock string to `H:MM` form before strict parsing.
pub fn normalize_clock(raw: &str) -> String {
    let mut s: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    s = s.replace('.', ":");
    if !s.contains(':') {
        s.push_str(":00");
    }
    s
}

/// Parse a single time-of-day using `%H:%M` after normalization.
pub fn parse_clock(field: &str, raw: &str) -> AppResult<NaiveTime> {
    let normalized = normalize_clock(raw);
    NaiveTime::parse_from_str(&normalized, "%H:%M").map_err(|_| AppError::parse(field, raw))
}

/// Remove whitespace and AM/PM markers, then split on the first `separator`.
///
/// Returns `Ok(None)` for an empty note (shift without break).
pub fn split_break_notes(raw: &str, separator: &str) -> AppResult<Option<(String, String)>> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase()
        .replace("PM", "")
        .replace("AM", "");

    if cleaned.is_empty() {
        return Ok(None);
    }

    match cleaned.split_once(separator) {
        Some((start, end)) if !start.is_empty() && !end.is_empty() => {
            Ok(Some((start.to_string(), end.to_string())))
        }
        _ => Err(AppError::Validation(format!(
            "break_notes must hold two times separated by '{separator}', got {raw:?}"
        ))),
    }
}

/// Parse a break note against its shift.
///
/// When the break would begin before a same-day shift starts, both bounds
/// are shifted by 12 hours (a 12-hour clock note without PM marker). A
/// break end that still precedes its start on a same-day shift is read as PM.
pub fn parse_break_notes(
    raw: &str,
    separator: &str,
    shift_start: NaiveTime,
    shift_end: NaiveTime,
) -> AppResult<Option<BreakWindow>> {
    let Some((start_raw, end_raw)) = split_break_notes(raw, separator)? else {
        return Ok(None);
    };

    let mut start = parse_clock("break_start", &start_raw)?;
    let mut end = parse_clock("break_end", &end_raw)?;

    if start < shift_start && shift_start < shift_end {
        start += TimeDelta::hours(12);
        end += TimeDelta::hours(12);
        trace!(note = raw, %start, %end, "break note read as PM");
    }

    // Mixed markers ("11AM-1PM"): only the end crossed noon
    if end < start && shift_start < shift_end {
        end += TimeDelta::hours(12);
        trace!(note = raw, %start, %end, "break end read as PM");
    }

    Ok(Some(BreakWindow { start, end }))
}
