//! FILENAME: core/analytics-engine/src/aggregate.rs
//! PURPOSE: The category and quarter aggregators behind the chart views.
//! CONTEXT: All aggregators are pure and total: empty input produces an
//!          empty/zero series, and records with out-of-vocabulary labels are
//!          silently dropped from enum-keyed counts (a deliberate policy,
//!          not an error path).

use rustc_hash::FxHashMap;

use model::{InventoryUnit, PaymentPlan, Quarter, UnitModel, UnitStatus};

use crate::series::CategorySeries;

/// Counts units per status, in the fixed vocabulary order.
///
/// Zero-count statuses are INCLUDED: the status chart doubles as the filter
/// selector, so all five categories must always be visible. This differs
/// from the other category aggregators on purpose.
pub fn aggregate_by_status(units: &[InventoryUnit]) -> CategorySeries {
    // ALL is in declaration order, so the discriminant indexes the table.
    let mut counts = [0u32; UnitStatus::ALL.len()];
    for unit in units {
        if let Some(status) = unit.known_status() {
            counts[status as usize] += 1;
        }
    }

    CategorySeries::new(
        UnitStatus::ALL.iter().map(|s| s.label().to_string()).collect(),
        counts.iter().map(|&c| c as f64).collect(),
    )
}

/// Counts units per unit model, in the fixed vocabulary order.
///
/// Zero-count models are OMITTED from the output, keeping the doughnut
/// legend down to categories that actually occur in the current record set.
pub fn aggregate_by_unit_model(units: &[InventoryUnit]) -> CategorySeries {
    let mut counts = [0u32; UnitModel::ALL.len()];
    for unit in units {
        if let Some(model) = unit.known_unit_model() {
            counts[model as usize] += 1;
        }
    }

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for model in UnitModel::ALL {
        let count = counts[model as usize];
        if count > 0 {
            labels.push(model.label().to_string());
            values.push(count as f64);
        }
    }

    CategorySeries::new(labels, values)
}

/// Counts units per payment plan, in the fixed vocabulary order.
/// Same omit-zero policy as [`aggregate_by_unit_model`].
pub fn aggregate_by_payment_plan(units: &[InventoryUnit]) -> CategorySeries {
    let mut counts = [0u32; PaymentPlan::ALL.len()];
    for unit in units {
        if let Some(plan) = PaymentPlan::from_label(&unit.payment_plan) {
            counts[plan as usize] += 1;
        }
    }

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for plan in PaymentPlan::ALL {
        let count = counts[plan as usize];
        if count > 0 {
            labels.push(plan.label().to_string());
            values.push(count as f64);
        }
    }

    CategorySeries::new(labels, values)
}

/// Sums `sales_value` per quarter over SOLD units only, chronologically.
///
/// Unsold units are excluded entirely (they do not contribute zero entries),
/// as are sold units whose quarter tag does not parse. Ordering comes from
/// the parsed (year, quarter number) pair, never from a string sort.
pub fn aggregate_by_quarter(units: &[InventoryUnit]) -> CategorySeries {
    let mut totals: FxHashMap<Quarter, f64> = FxHashMap::default();
    for unit in units {
        if !unit.is_sold {
            continue;
        }
        if let Ok(quarter) = unit.quarter.parse::<Quarter>() {
            *totals.entry(quarter).or_insert(0.0) += unit.sales_value;
        }
    }

    let mut quarters: Vec<Quarter> = totals.keys().copied().collect();
    quarters.sort();

    let values = quarters.iter().map(|q| totals[q]).collect();
    let labels = quarters.iter().map(|q| q.to_string()).collect();
    CategorySeries::new(labels, values)
}
