//! FILENAME: core/dashboard/src/view.rs
//! PURPOSE: View identities, their filter scopes, and the renderable snapshot.
//! CONTEXT: Not every view reacts to every filter dimension. A chart that
//!          doubles as a filter selector must keep showing all of its own
//!          choices, so it is exempt from the dimension it selects. This
//!          asymmetry is part of the dashboard contract.

use serde::{Deserialize, Serialize};

use analytics_engine::{CategorySeries, SummaryStats, UnitFilter, UnitModelPriceStats};

/// Which record set a view receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterScope {
    /// The full, unfiltered dataset.
    Unfiltered,
    /// Filtered by the status dimension only.
    StatusOnly,
    /// Filtered by both active dimensions.
    Both,
}

/// The consuming views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardView {
    SummaryCards,
    InventoryStatus,
    UnitModel,
    PaymentPlan,
    SalesTrend,
    PriceBoxPlot,
    PivotTable,
}

impl DashboardView {
    /// All views, in page order.
    pub const ALL: [DashboardView; 7] = [
        DashboardView::SummaryCards,
        DashboardView::InventoryStatus,
        DashboardView::UnitModel,
        DashboardView::PaymentPlan,
        DashboardView::SalesTrend,
        DashboardView::PriceBoxPlot,
        DashboardView::PivotTable,
    ];

    /// The filter scope this view receives.
    ///
    /// The status chart always shows the global distribution so the user
    /// can always pick a new status; the unit-model chart is narrowed by
    /// status but never by its own dimension. Everything else sees both
    /// active filters.
    pub fn filter_scope(&self) -> FilterScope {
        match self {
            DashboardView::InventoryStatus => FilterScope::Unfiltered,
            DashboardView::UnitModel => FilterScope::StatusOnly,
            DashboardView::SummaryCards
            | DashboardView::PaymentPlan
            | DashboardView::SalesTrend
            | DashboardView::PriceBoxPlot
            | DashboardView::PivotTable => FilterScope::Both,
        }
    }
}

/// Everything the presentation layer needs to render one frame of the
/// dashboard, recomputed in full on every filter-state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// The filter state this snapshot was derived from.
    pub filters: UnitFilter,

    /// Summary card rollups (both dimensions applied).
    pub summary: SummaryStats,

    /// Status chart series - always over the full dataset.
    pub inventory_status: CategorySeries,

    /// Unit-model chart series - status dimension only.
    pub unit_model: CategorySeries,

    /// Payment-plan chart series (both dimensions applied).
    pub payment_plan: CategorySeries,

    /// Quarterly sold-value trend (both dimensions applied).
    pub quarterly_sales: CategorySeries,

    /// Per-model price statistics (both dimensions applied).
    pub price_by_unit_model: Vec<UnitModelPriceStats>,
}
