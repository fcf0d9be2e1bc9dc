use super::{HourSlot, LabourTable, RatioTable, SalesTable};
use serde::Serialize;

/// Result of one run: the three hourly tables and the selected hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub labour: LabourTable,
    pub sales: SalesTable,
    pub ratios: RatioTable,
    pub best_hour: HourSlot,
    pub worst_hour: HourSlot,
}
