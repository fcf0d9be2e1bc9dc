use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of one-hour buckets in a business day.
pub const HOURS_PER_DAY: usize = 24;

/// One of the 24 fixed one-hour buckets of a day, keyed by its starting hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourSlot(u8);

impl HourSlot {
    pub fn new(hour: u32) -> AppResult<Self> {
        if (hour as usize) < HOURS_PER_DAY {
            Ok(Self(hour as u8))
        } else {
            Err(AppError::Validation(format!("hour out of range: {hour}")))
        }
    }

    /// Folds an iteration hour (possibly >= 24 for overnight shifts) back into the day.
    pub fn folded(hour: u32) -> Self {
        Self((hour as usize % HOURS_PER_DAY) as u8)
    }

    pub fn of(time: NaiveTime) -> Self {
        Self(time.hour() as u8)
    }

    pub fn all() -> impl Iterator<Item = HourSlot> {
        (0..HOURS_PER_DAY as u8).map(HourSlot)
    }

    pub fn hour(&self) -> u32 {
        self.0 as u32
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Zero-padded "HH:00" key.
    pub fn key(&self) -> String {
        format!("{:02}:00", self.0)
    }
}

impl fmt::Display for HourSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Serialize for HourSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
