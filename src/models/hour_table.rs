//! Fixed 24-slot tables used for labour cost, sales and ratios.

use super::hour_slot::{HOURS_PER_DAY, HourSlot};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Index};

/// A value for every hour of the day, indexed 0..=23.
///
/// Every slot always exists; a fresh table is all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourTable {
    values: [f64; HOURS_PER_DAY],
}

/// Labour cost per hour.
pub type LabourTable = HourTable;
/// Sales per hour.
pub type SalesTable = HourTable;
/// Labour/sales percentage per hour, or `-cost` when there were no sales.
pub type RatioTable = HourTable;

impl HourTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: [f64; HOURS_PER_DAY]) -> Self {
        Self { values }
    }

    /// Accumulate `amount` into `slot`.
    pub fn accumulate(&mut self, slot: HourSlot, amount: f64) {
        self.values[slot.index()] += amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (HourSlot, f64)> + '_ {
        HourSlot::all().map(|slot| (slot, self.values[slot.index()]))
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            values: self.values.map(f),
        }
    }
}

impl Index<HourSlot> for HourTable {
    type Output = f64;

    fn index(&self, slot: HourSlot) -> &f64 {
        &self.values[slot.index()]
    }
}

impl AddAssign<&HourTable> for HourTable {
    fn add_assign(&mut self, rhs: &HourTable) {
        for (lhs, r) in self.values.iter_mut().zip(rhs.values.iter()) {
            *lhs += r;
        }
    }
}

impl Add for HourTable {
    type Output = HourTable;

    fn add(mut self, rhs: HourTable) -> HourTable {
        self += &rhs;
        self
    }
}

impl Sum for HourTable {
    fn sum<I: Iterator<Item = HourTable>>(iter: I) -> Self {
        iter.fold(HourTable::new(), Add::add)
    }
}

/// Serialized as an ordered map `{"00:00": .., "01:00": .., ...}`.
impl Serialize for HourTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HOURS_PER_DAY))?;
        for (slot, value) in self.iter() {
            map.serialize_entry(&slot.key(), &value)?;
        }
        map.end()
    }
}
