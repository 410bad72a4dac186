//! FILENAME: core/dashboard/src/controller.rs
//! PURPOSE: The dashboard engine - dataset plus filter state plus analytics.
//! CONTEXT: The dataset is loaded once and read many times; the controller
//!          is the sole mutator of the cross-filter state. Every transition
//!          re-derives the full snapshot synchronously - the core has no
//!          incremental recomputation and needs none.

use analytics_engine::{
    aggregate_by_payment_plan, aggregate_by_quarter, aggregate_by_status, aggregate_by_unit_model,
    aggregate_price_by_unit_model, filter_units, pivot_rows, summarize, PivotDimension, PivotRow,
    UnitFilter,
};
use model::{InventoryUnit, UnitModel, UnitStatus};

use crate::crossfilter::{CrossFilter, SelectionEvent};
use crate::view::{DashboardSnapshot, DashboardView, FilterScope};

/// One dashboard session: the static record set and its filter state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    units: Vec<InventoryUnit>,
    filter: CrossFilter,
}

impl Dashboard {
    /// Creates a session over an already-loaded dataset.
    pub fn new(units: Vec<InventoryUnit>) -> Self {
        log::debug!("dashboard session over {} units", units.len());
        Dashboard {
            units,
            filter: CrossFilter::new(),
        }
    }

    /// The full dataset, unaffected by any filter.
    pub fn units(&self) -> &[InventoryUnit] {
        &self.units
    }

    /// Read access to the current filter state.
    pub fn filter(&self) -> &CrossFilter {
        &self.filter
    }

    // ========================================================================
    // SELECTION EVENTS (the only mutations)
    // ========================================================================

    /// Applies a selection event from the presentation layer.
    pub fn apply(&mut self, event: SelectionEvent) {
        self.filter.apply(event);
    }

    pub fn select_status(&mut self, status: UnitStatus) {
        self.filter.select_status(status);
    }

    pub fn select_unit_model(&mut self, unit_model: UnitModel) {
        self.filter.select_unit_model(unit_model);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    // ========================================================================
    // DERIVED RECORD SETS AND SNAPSHOT
    // ========================================================================

    /// The record set a given view receives under the current filter state.
    pub fn records_for(&self, view: DashboardView) -> Vec<InventoryUnit> {
        let filter = match view.filter_scope() {
            FilterScope::Unfiltered => UnitFilter::NONE,
            FilterScope::StatusOnly => self.filter.status_only(),
            FilterScope::Both => self.filter.as_filter(),
        };
        filter_units(&self.units, &filter)
    }

    /// Recomputes every aggregate for the current filter state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let both = filter_units(&self.units, &self.filter.as_filter());
        let status_scoped = filter_units(&self.units, &self.filter.status_only());

        DashboardSnapshot {
            filters: self.filter.as_filter(),
            summary: summarize(&both),
            inventory_status: aggregate_by_status(&self.units),
            unit_model: aggregate_by_unit_model(&status_scoped),
            payment_plan: aggregate_by_payment_plan(&both),
            quarterly_sales: aggregate_by_quarter(&both),
            price_by_unit_model: aggregate_price_by_unit_model(&both),
        }
    }

    /// Pivot rows for the pivot table view, grouped by the user's chosen
    /// dimensions over the fully filtered record set.
    pub fn pivot(&self, dimensions: &[PivotDimension]) -> Vec<PivotRow> {
        let records = self.records_for(DashboardView::PivotTable);
        pivot_rows(&records, dimensions)
    }
}
