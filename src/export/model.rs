// src/export/model.rs

use crate::models::{Analysis, HourSlot};
use serde::Serialize;

/// Flat per-hour row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HourExport {
    pub hour: String,
    pub labour: f64,
    pub sales: f64,
    pub ratio: f64,
}

/// JSON document: hourly rows plus the selected hours.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub best_hour: HourSlot,
    pub worst_hour: HourSlot,
    pub hours: Vec<HourExport>,
}

pub(crate) fn analysis_to_rows(analysis: &Analysis) -> Vec<HourExport> {
    analysis
        .ratios
        .iter()
        .map(|(slot, ratio)| HourExport {
            hour: slot.key(),
            labour: analysis.labour[slot],
            sales: analysis.sales[slot],
            ratio,
        })
        .collect()
}

impl From<&Analysis> for ReportExport {
    fn from(analysis: &Analysis) -> Self {
        Self {
            best_hour: analysis.best_hour,
            worst_hour: analysis.worst_hour,
            hours: analysis_to_rows(analysis),
        }
    }
}
