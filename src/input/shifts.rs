use crate::errors::AppResult;
use crate::input::read_records;
use crate::models::ShiftRecord;
use crate::utils::path::expand_tilde;
use crate::utils::time::{parse_break_notes, parse_clock};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use tracing::debug;

/// A raw row of the shifts CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftRow {
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub break_notes: String,
    pub pay_rate: f64,
}

impl ShiftRow {
    pub fn into_record(self, separator: &str) -> AppResult<ShiftRecord> {
        let start = parse_clock("start_time", &self.start_time)?;
        let end = parse_clock("end_time", &self.end_time)?;
        let break_window = parse_break_notes(&self.break_notes, separator, start, end)?;

        ShiftRecord::new(start, end, break_window, self.pay_rate)
    }
}

/// Parse shift records from any CSV reader.
pub fn read_shifts<R: Read>(reader: R, separator: &str) -> AppResult<Vec<ShiftRecord>> {
    read_records(reader, "shifts", |row: ShiftRow| row.into_record(separator))
}

/// Load the shifts CSV at `path`.
pub fn load_shifts(path: &str, separator: &str) -> AppResult<Vec<ShiftRecord>> {
    let path = expand_tilde(path);
    debug!(path = %path.display(), "loading shifts");
    let file = File::open(&path)?;
    read_shifts(file, separator)
}
