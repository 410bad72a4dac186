//! FILENAME: core/analytics-engine/src/summary.rs
//! PURPOSE: Total/sold/unsold rollups for the summary cards.
//! CONTEXT: Computes count, sales value sum, and the two mean prices for
//!          the whole record set and for its sold/unsold partitions in a
//!          single pass.

use serde::{Deserialize, Serialize};

use model::InventoryUnit;

/// One rollup row: either the whole set, the sold partition, or the unsold
/// partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySlice {
    /// Number of units in the slice.
    pub units: u32,

    /// Sum of sales values.
    pub sales_value: f64,

    /// Mean interest-free price. Defined as 0 over zero units, never NaN.
    pub avg_interest_free_price: f64,

    /// Mean price per square metre. Defined as 0 over zero units.
    pub avg_psm: f64,
}

/// The three rollups the summary cards render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total: SummarySlice,
    pub sold: SummarySlice,
    pub unsold: SummarySlice,
}

/// Running accumulator for one slice.
#[derive(Default)]
struct SliceAccumulator {
    units: u32,
    sales_value: f64,
    interest_free_sum: f64,
    psm_sum: f64,
}

impl SliceAccumulator {
    fn add(&mut self, unit: &InventoryUnit) {
        self.units += 1;
        self.sales_value += unit.sales_value;
        self.interest_free_sum += unit.interest_free_price;
        self.psm_sum += unit.psm;
    }

    fn finish(self) -> SummarySlice {
        let divisor = self.units as f64;
        SummarySlice {
            units: self.units,
            sales_value: self.sales_value,
            avg_interest_free_price: if self.units > 0 {
                self.interest_free_sum / divisor
            } else {
                0.0
            },
            avg_psm: if self.units > 0 { self.psm_sum / divisor } else { 0.0 },
        }
    }
}

/// Computes the summary card statistics over a record set.
///
/// An empty record set produces all-zero slices - means are defined as 0
/// over zero units rather than NaN.
pub fn summarize(units: &[InventoryUnit]) -> SummaryStats {
    let mut total = SliceAccumulator::default();
    let mut sold = SliceAccumulator::default();
    let mut unsold = SliceAccumulator::default();

    for unit in units {
        total.add(unit);
        if unit.is_sold {
            sold.add(unit);
        } else {
            unsold.add(unit);
        }
    }

    SummaryStats {
        total: total.finish(),
        sold: sold.finish(),
        unsold: unsold.finish(),
    }
}
