//! Per-hour labour/sales ratio and best/worst hour selection.

use crate::errors::{AppError, AppResult};
use crate::models::{HourSlot, LabourTable, RatioTable, SalesTable};
use tracing::debug;

/// Labour as a percentage of sales for each hour.
///
/// Hours without sales carry `-labour` (a cost sentinel, not a percentage),
/// or 0 when nothing was spent either.
pub fn compute_ratio(labour: &LabourTable, sales: &SalesTable) -> RatioTable {
    RatioTable::from_values(std::array::from_fn(|i| {
        let slot = HourSlot::folded(i as u32);
        let (cost, sold) = (labour[slot], sales[slot]);
        if sold > 0.0 {
            cost / sold * 100.0
        } else if cost > 0.0 {
            -cost
        } else {
            0.0
        }
    }))
}

/// Returns `(best_hour, worst_hour)`.
///
/// - worst: the most negative ratio if any is negative, otherwise the highest ratio
/// - best: the lowest strictly positive ratio
///
/// Ties go to the earlier hour.
pub fn select_best_worst(ratios: &RatioTable) -> AppResult<(HourSlot, HourSlot)> {
    let (min_slot, min_value) = extreme(ratios, |v, cur| v < cur);

    let worst = if min_value < 0.0 {
        min_slot
    } else {
        extreme(ratios, |v, cur| v > cur).0
    };

    let (best, _) = first_by(ratios.iter().filter(|(_, v)| *v > 0.0), |v, cur| v < cur)
        .ok_or(AppError::NoPositiveRatio)?;

    debug!(%best, %worst, "selected hours");
    Ok((best, worst))
}

/// Extreme over all 24 slots; the earliest hour wins ties.
fn extreme(ratios: &RatioTable, better: impl Fn(f64, f64) -> bool) -> (HourSlot, f64) {
    let first = HourSlot::folded(0);
    ratios
        .iter()
        .fold((first, ratios[first]), |cur, (slot, value)| {
            if better(value, cur.1) { (slot, value) } else { cur }
        })
}

/// First entry that no later entry beats under `better`.
fn first_by(
    entries: impl Iterator<Item = (HourSlot, f64)>,
    better: impl Fn(f64, f64) -> bool,
) -> Option<(HourSlot, f64)> {
    entries.fold(None, |acc, (slot, value)| match acc {
        Some((_, cur)) if !better(value, cur) => acc,
        _ => Some((slot, value)),
    })
}
