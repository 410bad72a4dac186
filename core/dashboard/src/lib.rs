//! FILENAME: core/dashboard/src/lib.rs
//! Dashboard controller for the inventory analytics core.
//!
//! This crate owns the cross-filter state and derives the record sets and
//! aggregated shapes each view consumes. It is the single writer of filter
//! state; the presentation layer only emits selection events into it and
//! renders the snapshot it produces.
//!
//! Layers:
//! - `crossfilter`: The two-dimension filter state machine
//! - `view`: View identities, filter scopes, and the renderable snapshot
//! - `controller`: The dashboard engine tying dataset + state + analytics

pub mod controller;
pub mod crossfilter;
pub mod view;

pub use controller::Dashboard;
pub use crossfilter::{CrossFilter, SelectionEvent};
pub use view::{DashboardSnapshot, DashboardView, FilterScope};
