//! FILENAME: core/analytics-engine/src/lib.rs
//! Analytics subsystem for the inventory dashboard.
//!
//! This crate provides the pure calculation layer as a standalone module.
//! It depends on `model` only for shared types (InventoryUnit and the
//! controlled vocabularies).
//!
//! Layers:
//! - `filter`: Equality filtering over the two cross-filter dimensions
//! - `series`: Renderable label/value output for the frontend charts
//! - `aggregate`: Category and quarter aggregators
//! - `summary`: Total/sold/unsold rollups for the summary cards
//! - `price`: Per-model price statistics for the box plot
//! - `pivot`: Dimension-driven row grouping for the pivot table
//! - `format`: Number formatting helpers shared by the chart views

pub mod aggregate;
pub mod filter;
pub mod format;
pub mod pivot;
pub mod price;
pub mod series;
pub mod summary;

pub use aggregate::{
    aggregate_by_payment_plan, aggregate_by_quarter, aggregate_by_status, aggregate_by_unit_model,
};
pub use filter::{filter_units, UnitFilter};
pub use format::{format_compact, format_thousands, percentage_share};
pub use pivot::{pivot_rows, PivotDimension, PivotRow};
pub use price::{aggregate_price_by_unit_model, AvgCloserTo, UnitModelPriceStats};
pub use series::CategorySeries;
pub use summary::{summarize, SummarySlice, SummaryStats};

#[cfg(test)]
mod tests;
