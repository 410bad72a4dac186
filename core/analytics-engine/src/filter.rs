//! FILENAME: core/analytics-engine/src/filter.rs
//! PURPOSE: The cross-filter predicate - zero, one, or two equality filters.
//! CONTEXT: Each dimension is either a concrete vocabulary value or absent.
//!          Absent dimensions pass everything; matching is exact label
//!          equality, case-sensitive, no normalisation.

use serde::{Deserialize, Serialize};

use model::{InventoryUnit, UnitModel, UnitStatus};

/// The pair of active cross-filter dimensions.
///
/// Because the dimensions are typed as vocabulary enums, a caller cannot
/// name a status outside the closed set - the "unknown filter value" case
/// is unrepresentable here. A record whose raw field value is outside the
/// vocabulary simply never matches a concrete filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitFilter {
    /// Status dimension, or `None` for no status filtering.
    pub status: Option<UnitStatus>,

    /// Unit-model dimension, or `None` for no model filtering.
    pub unit_model: Option<UnitModel>,
}

impl UnitFilter {
    /// Both dimensions absent - the identity filter.
    pub const NONE: UnitFilter = UnitFilter {
        status: None,
        unit_model: None,
    };

    pub fn new(status: Option<UnitStatus>, unit_model: Option<UnitModel>) -> Self {
        UnitFilter { status, unit_model }
    }

    /// True when at least one dimension is set.
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.unit_model.is_some()
    }

    /// Whether a unit passes both dimensions.
    pub fn matches(&self, unit: &InventoryUnit) -> bool {
        let status_match = self
            .status
            .map_or(true, |status| unit.status == status.label());
        let model_match = self
            .unit_model
            .map_or(true, |model| unit.unit_model == model.label());
        status_match && model_match
    }
}

/// Applies the filter to a record set, preserving input order.
///
/// With both dimensions absent this is an identity pass-through; empty input
/// yields empty output.
pub fn filter_units(units: &[InventoryUnit], filter: &UnitFilter) -> Vec<InventoryUnit> {
    units
        .iter()
        .filter(|unit| filter.matches(unit))
        .cloned()
        .collect()
}
