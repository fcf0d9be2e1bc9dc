use crate::errors::AppResult;
use crate::input::read_records;
use crate::models::TransactionRecord;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_clock;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use tracing::debug;

/// A raw row of the transactions CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRow {
    pub time: String,
    pub amount: f64,
}

impl TransactionRow {
    pub fn into_record(self) -> AppResult<TransactionRecord> {
        let timestamp = parse_clock("time", &self.time)?;
        TransactionRecord::new(timestamp, self.amount)
    }
}

pub fn read_transactions<R: Read>(reader: R) -> AppResult<Vec<TransactionRecord>> {
    read_records(reader, "transactions", TransactionRow::into_record)
}

/// Load the transactions CSV at `path`.
pub fn load_transactions(path: &str) -> AppResult<Vec<TransactionRecord>> {
    let path = expand_tilde(path);
    debug!(path = %path.display(), "loading transactions");
    let file = File::open(&path)?;
    read_transactions(file)
}
