use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use serde::Serialize;

/// A single point-of-sale transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub timestamp: NaiveTime,
    pub amount: f64,
}

impl TransactionRecord {
    pub fn new(timestamp: NaiveTime, amount: f64) -> AppResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::Validation(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        Ok(Self { timestamp, amount })
    }
}
