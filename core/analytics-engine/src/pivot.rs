//! FILENAME: core/analytics-engine/src/pivot.rs
//! PURPOSE: Dimension-driven row grouping for the inventory pivot table.
//! CONTEXT: The pivot table lets the user pick which record fields act as
//!          grouping dimensions; each resulting row carries the unit count
//!          and sales value sum for its key combination.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use model::InventoryUnit;

/// A record field usable as a pivot grouping dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PivotDimension {
    ProjectName,
    Status,
    UnitModel,
    PaymentPlan,
    Quarter,
}

impl PivotDimension {
    /// All dimensions, in the order they are offered to the user.
    pub const ALL: [PivotDimension; 5] = [
        PivotDimension::ProjectName,
        PivotDimension::Status,
        PivotDimension::UnitModel,
        PivotDimension::PaymentPlan,
        PivotDimension::Quarter,
    ];

    /// Column header shown for this dimension.
    pub fn title(&self) -> &'static str {
        match self {
            PivotDimension::ProjectName => "Project Name",
            PivotDimension::Status => "Status",
            PivotDimension::UnitModel => "Unit Model",
            PivotDimension::PaymentPlan => "Payment Plan",
            PivotDimension::Quarter => "Quarter",
        }
    }

    /// Extracts this dimension's value from a record.
    fn value_of<'a>(&self, unit: &'a InventoryUnit) -> &'a str {
        match self {
            PivotDimension::ProjectName => &unit.project_name,
            PivotDimension::Status => &unit.status,
            PivotDimension::UnitModel => &unit.unit_model,
            PivotDimension::PaymentPlan => &unit.payment_plan,
            PivotDimension::Quarter => &unit.quarter,
        }
    }
}

/// Group key: one value per selected dimension. Pivots rarely go deeper
/// than a few levels, so the key usually lives inline.
pub type PivotKey = SmallVec<[String; 4]>;

/// One aggregated pivot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotRow {
    /// The dimension values identifying this group, in dimension order.
    pub keys: PivotKey,

    /// Number of units in the group.
    pub units: u32,

    /// Sum of sales values in the group.
    pub total_sales: f64,
}

impl PivotRow {
    /// Mean sales value per unit; 0 for an empty group.
    pub fn avg_sales(&self) -> f64 {
        if self.units > 0 {
            self.total_sales / self.units as f64
        } else {
            0.0
        }
    }
}

/// Groups the record set by the selected dimensions.
///
/// Rows are sorted by their key vectors so output is deterministic
/// regardless of record order. With no dimensions selected the result is a
/// single grand-total row (or no rows for an empty record set).
pub fn pivot_rows(units: &[InventoryUnit], dimensions: &[PivotDimension]) -> Vec<PivotRow> {
    if units.is_empty() {
        return Vec::new();
    }

    let mut groups: FxHashMap<PivotKey, (u32, f64)> = FxHashMap::default();
    for unit in units {
        let key: PivotKey = dimensions
            .iter()
            .map(|dim| dim.value_of(unit).to_string())
            .collect();
        let entry = groups.entry(key).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += unit.sales_value;
    }

    let mut rows: Vec<PivotRow> = groups
        .into_iter()
        .map(|(keys, (units, total_sales))| PivotRow {
            keys,
            units,
            total_sales,
        })
        .collect();
    rows.sort_by(|a, b| a.keys.cmp(&b.keys));
    rows
}
