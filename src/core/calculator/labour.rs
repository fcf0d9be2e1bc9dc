//! Spreads each shift's labour cost over the hour slots it touches.
//!
//! Every touched hour pays for the minutes actually worked in it, so the
//! first and last hours are pro-rated. Break handling is hour-granular:
//! hours from the break-start hour up to (excluding) the break-end hour pay
//! nothing, and the break-end hour loses the minutes the break still covers.
//! Break hours are counted past midnight like the shift's own hours, so a
//! break from 23:30 to 00:30 zeroes 23:00 and trims 00:00.

use crate::models::{HourSlot, LabourTable, ShiftRecord};
use chrono::Timelike;
use tracing::{debug, trace};

const MINUTES_PER_HOUR: i64 = 60;

/// Labour cost of a single shift, nonzero only in the slots it touches.
pub fn allocate_shift(shift: &ShiftRecord) -> LabourTable {
    let start_h = shift.start_time.hour();
    let mut end_h = shift.end_time.hour();

    // PM start, AM finish: keep counting past midnight
    if end_h < start_h {
        end_h += 24;
    }

    let start_min = minute_of(start_h, shift.start_time.minute());
    let end_min = minute_of(end_h, shift.end_time.minute());
    let rate = shift.pay_rate;

    // Break bounds on the same unfolded clock as the shift, plus the minutes
    // the break still covers in its final hour.
    let break_hours = shift.break_window.map(|b| {
        let bs_min = start_min + shift.offset(b.start);
        let be_min = start_min + shift.offset(b.end);
        let (bs_h, be_h) = (bs_min / MINUTES_PER_HOUR, be_min / MINUTES_PER_HOUR);
        let covered = if bs_h == be_h {
            be_min - bs_min
        } else {
            be_min % MINUTES_PER_HOUR
        };
        (bs_h as u32, be_h as u32, covered)
    });

    let mut table = LabourTable::new();

    for h in start_h..=end_h {
        let slot = HourSlot::folded(h);
        let hour_start = minute_of(h, 0);
        let hour_end = hour_start + MINUTES_PER_HOUR;

        let worked = (end_min.min(hour_end) - start_min.max(hour_start)).clamp(0, MINUTES_PER_HOUR);

        let paid = match break_hours {
            Some((bs_h, be_h, covered)) => {
                if h >= bs_h && h < be_h {
                    trace!(hour = %slot, "inside break, unpaid");
                    continue;
                }
                if h == be_h {
                    (worked - covered).max(0)
                } else {
                    worked
                }
            }
            None => worked,
        };

        let pay = paid as f64 / MINUTES_PER_HOUR as f64 * rate;
        trace!(hour = %slot, minutes = paid, pay, "allocated");
        table.accumulate(slot, pay);
    }

    table
}

/// Sum of the per-shift allocations.
pub fn allocate_shifts(shifts: &[ShiftRecord]) -> LabourTable {
    debug!(count = shifts.len(), "allocating labour cost");
    shifts.iter().map(allocate_shift).sum()
}

fn minute_of(hour: u32, minute: u32) -> i64 {
    hour as i64 * MINUTES_PER_HOUR + minute as i64
}
