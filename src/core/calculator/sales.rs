use crate::models::{HourSlot, SalesTable, TransactionRecord};
use tracing::debug;

/// Sum transaction amounts per hour slot, rounding each hour to `decimals` places.
pub fn aggregate_sales(transactions: &[TransactionRecord], decimals: u32) -> SalesTable {
    debug!(count = transactions.len(), "aggregating sales");

    let mut table = SalesTable::new();
    for tx in transactions {
        table.accumulate(HourSlot::of(tx.timestamp), tx.amount);
    }

    table.map(|v| round_to(v, decimals))
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
