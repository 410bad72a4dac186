//! FILENAME: core/analytics-engine/src/series.rs
//! PURPOSE: The label/value pair every chart view consumes.

use serde::{Deserialize, Serialize};

/// A labelled series ready for chart rendering.
///
/// `labels` and `values` are parallel: `values[i]` belongs to `labels[i]`.
/// Counts are carried as `f64` so count charts and value-sum charts share
/// one shape, matching what the charting layer expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl CategorySeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(labels.len(), values.len());
        CategorySeries { labels, values }
    }

    /// Number of categories in the series.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all values (used for percentage tooltips).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
