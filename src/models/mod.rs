pub mod analysis;
pub mod hour_slot;
pub mod hour_table;
pub mod shift;
pub mod transaction;

pub use analysis::Analysis;
pub use hour_slot::HourSlot;
pub use hour_table::{HourTable, LabourTable, RatioTable, SalesTable};
pub use shift::{BreakWindow, ShiftRecord};
pub use transaction::TransactionRecord;
