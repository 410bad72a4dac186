//! FILENAME: core/model/src/lib.rs
//! PURPOSE: Shared data model for the inventory analytics core.
//! CONTEXT: Re-exports the record type and controlled vocabularies for use
//!          by the analytics and dashboard crates.

pub mod quarter;
pub mod unit;
pub mod vocab;

// Re-export commonly used types at the crate root
pub use quarter::{Quarter, QuarterParseError};
pub use unit::InventoryUnit;
pub use vocab::{PaymentPlan, UnitModel, UnitStatus};
