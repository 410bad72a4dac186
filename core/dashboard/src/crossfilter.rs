//! FILENAME: core/dashboard/src/crossfilter.rs
//! PURPOSE: The cross-filter state machine over (status, unit model).
//! CONTEXT: Status is the primary filter axis: ANY status click - selecting
//!          a new status or toggling the active one off - resets the
//!          unit-model dimension. Unit-model clicks never touch status.

use serde::{Deserialize, Serialize};

use analytics_engine::UnitFilter;
use model::{UnitModel, UnitStatus};

/// A selection event emitted by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SelectionEvent {
    SelectStatus(UnitStatus),
    SelectUnitModel(UnitModel),
    ClearFilters,
}

/// The two active filter dimensions. Both start absent; exactly one
/// instance exists per dashboard session, owned by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossFilter {
    status: Option<UnitStatus>,
    unit_model: Option<UnitModel>,
}

impl CrossFilter {
    pub fn new() -> Self {
        CrossFilter::default()
    }

    pub fn status(&self) -> Option<UnitStatus> {
        self.status
    }

    pub fn unit_model(&self) -> Option<UnitModel> {
        self.unit_model
    }

    /// True when either dimension is active.
    pub fn is_active(&self) -> bool {
        self.status.is_some() || self.unit_model.is_some()
    }

    /// Handles a status chart click. Clicking the active status toggles it
    /// off; clicking any status, either way, resets the unit-model
    /// dimension - status is the primary axis and a status change
    /// invalidates the narrower model selection.
    pub fn select_status(&mut self, status: UnitStatus) {
        if self.status == Some(status) {
            self.status = None;
        } else {
            self.status = Some(status);
        }
        self.unit_model = None;
        log::debug!(
            "cross-filter -> status: {:?}, unit model: cleared",
            self.status.map(|s| s.label())
        );
    }

    /// Handles a unit-model chart click. Toggles only the model dimension;
    /// the status dimension is left untouched.
    pub fn select_unit_model(&mut self, unit_model: UnitModel) {
        if self.unit_model == Some(unit_model) {
            self.unit_model = None;
        } else {
            self.unit_model = Some(unit_model);
        }
        log::debug!(
            "cross-filter -> status: {:?}, unit model: {:?}",
            self.status.map(|s| s.label()),
            self.unit_model.map(|m| m.label())
        );
    }

    /// Resets both dimensions, regardless of current state.
    pub fn clear(&mut self) {
        self.status = None;
        self.unit_model = None;
        log::debug!("cross-filter cleared");
    }

    /// Applies a presentation-layer event.
    pub fn apply(&mut self, event: SelectionEvent) {
        match event {
            SelectionEvent::SelectStatus(status) => self.select_status(status),
            SelectionEvent::SelectUnitModel(model) => self.select_unit_model(model),
            SelectionEvent::ClearFilters => self.clear(),
        }
    }

    /// The full two-dimension filter (for views that react to both axes).
    pub fn as_filter(&self) -> UnitFilter {
        UnitFilter::new(self.status, self.unit_model)
    }

    /// The status-only filter (for the unit-model chart, which must not be
    /// narrowed by its own dimension).
    pub fn status_only(&self) -> UnitFilter {
        UnitFilter::new(self.status, None)
    }
}
