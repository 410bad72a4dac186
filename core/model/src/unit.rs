//! FILENAME: core/model/src/unit.rs
//! PURPOSE: The inventory unit record - one row of the dashboard dataset.
//! CONTEXT: Records are immutable inputs; every transformation downstream
//!          produces new derived collections and never mutates a unit.

use serde::{Deserialize, Serialize};

use crate::vocab::{UnitModel, UnitStatus};

/// One inventory unit as loaded into the dataset.
///
/// The vocabulary fields (`status`, `unit_model`, `payment_plan`) carry the
/// raw strings from the data source. Values outside the closed vocabularies
/// are valid records - they are silently dropped from enum-keyed
/// aggregations rather than rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUnit {
    /// Project the unit belongs to.
    pub project_name: String,

    /// Sales status label (see [`UnitStatus`] for the known set).
    pub status: String,

    /// Unit model label (see [`UnitModel`] for the known set).
    pub unit_model: String,

    /// Payment plan label (see [`crate::vocab::PaymentPlan`]).
    pub payment_plan: String,

    /// Quarter tag in `"<year>-Q<n>"` form. Only meaningful for sold units.
    pub quarter: String,

    /// Contracted sales value.
    pub sales_value: f64,

    /// Interest-free list price.
    pub interest_free_price: f64,

    /// Price per square metre.
    pub psm: f64,

    /// Whether the unit has been sold.
    pub is_sold: bool,
}

impl InventoryUnit {
    /// Creates a minimal unit with zeroed measures. Mostly useful in tests
    /// and fixtures; real datasets arrive fully populated.
    pub fn new(project_name: &str, status: UnitStatus, unit_model: UnitModel) -> Self {
        InventoryUnit {
            project_name: project_name.to_string(),
            status: status.label().to_string(),
            unit_model: unit_model.label().to_string(),
            payment_plan: String::new(),
            quarter: String::new(),
            sales_value: 0.0,
            interest_free_price: 0.0,
            psm: 0.0,
            is_sold: false,
        }
    }

    /// Returns the status as a vocabulary value, if recognised.
    pub fn known_status(&self) -> Option<UnitStatus> {
        UnitStatus::from_label(&self.status)
    }

    /// Returns the unit model as a vocabulary value, if recognised.
    pub fn known_unit_model(&self) -> Option<UnitModel> {
        UnitModel::from_label(&self.unit_model)
    }
}
