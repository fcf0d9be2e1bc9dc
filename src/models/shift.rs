use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Unpaid break inside a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One employee's shift, already validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_window: Option<BreakWindow>,
    pub pay_rate: f64,
}

impl ShiftRecord {
    /// Builds a shift, rejecting negative rates and breaks that fall outside the shift.
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        break_window: Option<BreakWindow>,
        pay_rate: f64,
    ) -> AppResult<Self> {
        if !pay_rate.is_finite() || pay_rate < 0.0 {
            return Err(AppError::Validation(format!(
                "pay_rate must be a non-negative number, got {pay_rate}"
            )));
        }

        // Wraps past midnight but starts and ends in the same clock hour:
        // the hour grid cannot tell it apart from a same-day shift.
        if end_time < start_time && end_time.hour() == start_time.hour() {
            return Err(AppError::Validation(format!(
                "shift {}-{} wraps past midnight within a single hour",
                start_time.format("%H:%M"),
                end_time.format("%H:%M"),
            )));
        }

        let shift = Self {
            start_time,
            end_time,
            break_window,
            pay_rate,
        };

        if let Some(b) = break_window {
            let bs = shift.offset(b.start);
            let be = shift.offset(b.end);
            if bs > be || be > shift.offset(end_time) {
                return Err(AppError::Validation(format!(
                    "break {}-{} is outside shift {}-{}",
                    b.start.format("%H:%M"),
                    b.end.format("%H:%M"),
                    start_time.format("%H:%M"),
                    end_time.format("%H:%M"),
                )));
            }
        }

        Ok(shift)
    }

    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Minutes from shift start to `t`, wrapping past midnight.
    pub fn offset(&self, t: NaiveTime) -> i64 {
        (t - self.start_time).num_minutes().rem_euclid(MINUTES_PER_DAY)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.offset(self.end_time)
    }

    pub fn break_minutes(&self) -> i64 {
        self.break_window
            .map(|b| self.offset(b.end) - self.offset(b.start))
            .unwrap_or(0)
    }

    /// Paid hours: shift length minus the break.
    pub fn paid_hours(&self) -> f64 {
        (self.duration_minutes() - self.break_minutes()) as f64 / 60.0
    }
}
