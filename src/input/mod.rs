//! CSV ingestion: raw rows → validated shift and transaction records.

pub mod shifts;
pub mod transactions;

pub use shifts::{ShiftRow, load_shifts, read_shifts};
pub use transactions::{TransactionRow, load_transactions, read_transactions};

use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Deserialize every row of a headed CSV, converting each with `convert`.
///
/// Errors are tagged with `source` and the 1-based data row number.
pub(crate) fn read_records<R, Row, T>(
    reader: R,
    source: &str,
    convert: impl Fn(Row) -> AppResult<T>,
) -> AppResult<Vec<T>>
where
    R: Read,
    Row: DeserializeOwned,
{
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<Row>().enumerate() {
        let record = row
            .map_err(AppError::from)
            .and_then(&convert)
            .map_err(|e| AppError::Record {
                source_name: source.to_string(),
                row: i + 1,
                source: Box::new(e),
            })?;
        out.push(record);
    }

    Ok(out)
}
