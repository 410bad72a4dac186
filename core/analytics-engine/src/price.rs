//! FILENAME: core/analytics-engine/src/price.rs
//! PURPOSE: Per-model price statistics for the unit price box plot.
//! CONTEXT: Collects interest-free prices per unit model and emits exact
//!          min/max plus the arithmetic mean - no outlier removal and no
//!          weighting.

use serde::{Deserialize, Serialize};

use model::{InventoryUnit, UnitModel};

/// Whether the mean sits closer to the minimum or the maximum.
/// Ties resolve to `Max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AvgCloserTo {
    Min,
    Max,
}

/// Price statistics for one unit model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitModelPriceStats {
    /// Display label of the unit model.
    pub unit_model: String,

    pub min: f64,
    pub max: f64,

    /// Arithmetic mean of the collected prices.
    pub avg: f64,

    /// Skew hint for rendering the average marker.
    pub avg_closer_to: AvgCloserTo,
}

/// Computes min/avg/max of `interest_free_price` per unit model.
///
/// Models with no matching records are omitted; the result follows the
/// fixed vocabulary order, not discovery order. Records with labels outside
/// the vocabulary are dropped.
pub fn aggregate_price_by_unit_model(units: &[InventoryUnit]) -> Vec<UnitModelPriceStats> {
    let mut prices: [Vec<f64>; UnitModel::ALL.len()] = Default::default();
    for unit in units {
        if let Some(model) = unit.known_unit_model() {
            prices[model as usize].push(unit.interest_free_price);
        }
    }

    let mut result = Vec::new();
    for model in UnitModel::ALL {
        let collected = &prices[model as usize];
        if collected.is_empty() {
            continue;
        }

        let min = collected.iter().copied().fold(f64::INFINITY, f64::min);
        let max = collected.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = collected.iter().sum::<f64>() / collected.len() as f64;

        let avg_closer_to = if (avg - min).abs() < (max - avg).abs() {
            AvgCloserTo::Min
        } else {
            AvgCloserTo::Max
        };

        result.push(UnitModelPriceStats {
            unit_model: model.label().to_string(),
            min,
            max,
            avg,
            avg_closer_to,
        });
    }

    result
}
