//! FILENAME: core/analytics-engine/src/tests.rs
//! PURPOSE: Consolidated unit tests for the analytics engine crate.

use model::{InventoryUnit, UnitModel, UnitStatus};

use crate::aggregate::{
    aggregate_by_payment_plan, aggregate_by_quarter, aggregate_by_status, aggregate_by_unit_model,
};
use crate::filter::{filter_units, UnitFilter};
use crate::format::{format_compact, format_thousands, percentage_share};
use crate::pivot::{pivot_rows, PivotDimension};
use crate::price::{aggregate_price_by_unit_model, AvgCloserTo};
use crate::summary::summarize;

// ========================================
// FIXTURES
// ========================================

fn unit(
    status: &str,
    unit_model: &str,
    payment_plan: &str,
    quarter: &str,
    sales_value: f64,
    is_sold: bool,
) -> InventoryUnit {
    InventoryUnit {
        project_name: "Palm Gate".to_string(),
        status: status.to_string(),
        unit_model: unit_model.to_string(),
        payment_plan: payment_plan.to_string(),
        quarter: quarter.to_string(),
        sales_value,
        interest_free_price: sales_value / 2.0,
        psm: 50_000.0,
        is_sold,
    }
}

fn sample_units() -> Vec<InventoryUnit> {
    vec![
        unit("Available", "Villa", "Cash", "", 4_000_000.0, false),
        unit("Contracted", "Villa", "5 Yrs", "2024-Q1", 5_000_000.0, true),
        unit("Available", "Studio", "3months", "", 1_000_000.0, false),
        unit("Reserved", "Twin House", "10 Yrs", "", 3_000_000.0, false),
        unit("Contracted", "Studio", "Cash", "2023-Q4", 1_200_000.0, true),
    ]
}

// ========================================
// FILTER ENGINE
// ========================================

#[test]
fn filter_with_both_dimensions_absent_is_identity() {
    let units = sample_units();
    assert_eq!(filter_units(&units, &UnitFilter::NONE), units);
    assert!(filter_units(&[], &UnitFilter::NONE).is_empty());
}

#[test]
fn filter_by_status_only() {
    let units = sample_units();
    let filter = UnitFilter::new(Some(UnitStatus::Available), None);
    let filtered = filter_units(&units, &filter);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|u| u.status == "Available"));
    // Stable: input order preserved
    assert_eq!(filtered[0].unit_model, "Villa");
    assert_eq!(filtered[1].unit_model, "Studio");
}

#[test]
fn filter_by_both_dimensions() {
    let units = sample_units();
    let filter = UnitFilter::new(Some(UnitStatus::Contracted), Some(UnitModel::Studio));
    let filtered = filter_units(&units, &filter);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].sales_value, 1_200_000.0);
}

#[test]
fn filter_never_matches_out_of_vocabulary_records() {
    let mut units = sample_units();
    units.push(unit("Mystery", "Villa", "Cash", "", 9_000_000.0, false));

    // The odd record passes absent filters...
    assert_eq!(filter_units(&units, &UnitFilter::NONE).len(), 6);

    // ...but no concrete status filter can select it.
    for status in UnitStatus::ALL {
        let filter = UnitFilter::new(Some(status), None);
        assert!(filter_units(&units, &filter)
            .iter()
            .all(|u| u.status == status.label()));
    }
}

// ========================================
// SUMMARY STATISTICS
// ========================================

#[test]
fn summarize_empty_set_is_all_zeros() {
    let stats = summarize(&[]);
    for slice in [stats.total, stats.sold, stats.unsold] {
        assert_eq!(slice.units, 0);
        assert_eq!(slice.sales_value, 0.0);
        assert_eq!(slice.avg_interest_free_price, 0.0);
        assert_eq!(slice.avg_psm, 0.0);
    }
}

#[test]
fn summarize_partitions_on_is_sold() {
    let units = sample_units();
    let stats = summarize(&units);

    assert_eq!(stats.total.units, 5);
    assert_eq!(stats.sold.units, 2);
    assert_eq!(stats.unsold.units, 3);
    assert_eq!(stats.total.units, stats.sold.units + stats.unsold.units);

    assert_eq!(stats.sold.sales_value, 6_200_000.0);
    assert_eq!(stats.unsold.sales_value, 8_000_000.0);
    assert_eq!(stats.total.sales_value, 14_200_000.0);

    // interest_free_price is half the sales value in the fixture
    assert_eq!(stats.sold.avg_interest_free_price, 6_200_000.0 / 2.0 / 2.0);
    assert_eq!(stats.total.avg_psm, 50_000.0);
}

// ========================================
// STATUS AGGREGATOR (zero-inclusive)
// ========================================

#[test]
fn status_series_always_has_all_five_labels() {
    let series = aggregate_by_status(&[]);
    assert_eq!(series.labels.len(), 5);
    assert!(series.values.iter().all(|&v| v == 0.0));

    let units = sample_units();
    let series = aggregate_by_status(&units);
    assert_eq!(
        series.labels,
        vec![
            "Available",
            "Blocked Development",
            "Reserved",
            "Contracted",
            "Partner"
        ]
    );
    assert_eq!(series.values, vec![2.0, 0.0, 1.0, 2.0, 0.0]);
}

#[test]
fn status_series_drops_unrecognised_statuses_from_the_counts() {
    let mut units = sample_units();
    units.push(unit("Sold", "Villa", "Cash", "", 1.0, true));

    let series = aggregate_by_status(&units);
    assert_eq!(series.labels.len(), 5);
    // 6 records, one with an unknown status label
    assert_eq!(series.total(), (units.len() - 1) as f64);
}

// ========================================
// UNIT MODEL / PAYMENT PLAN AGGREGATORS (zero-exclusive)
// ========================================

#[test]
fn unit_model_series_omits_zero_counts_and_keeps_vocabulary_order() {
    let units = sample_units();
    let series = aggregate_by_unit_model(&units);

    // Twin House precedes Villa precedes Studio in the vocabulary order
    assert_eq!(series.labels, vec!["Twin House", "Villa", "Studio"]);
    assert_eq!(series.values, vec![1.0, 2.0, 2.0]);
    assert!(series.values.iter().all(|&v| v > 0.0));
    assert!(series.total() <= units.len() as f64);
}

#[test]
fn payment_plan_series_omits_zero_counts() {
    let units = sample_units();
    let series = aggregate_by_payment_plan(&units);

    assert_eq!(series.labels, vec!["Cash", "3months", "5 Yrs", "10 Yrs"]);
    assert_eq!(series.values, vec![2.0, 1.0, 1.0, 1.0]);

    assert!(aggregate_by_payment_plan(&[]).is_empty());
}

// ========================================
// QUARTERLY AGGREGATOR
// ========================================

#[test]
fn quarter_series_is_sold_only_and_chronological() {
    let units = vec![
        unit("Contracted", "Villa", "Cash", "2024-Q2", 10.0, true),
        unit("Contracted", "Villa", "Cash", "2023-Q4", 20.0, true),
        unit("Contracted", "Villa", "Cash", "2024-Q1", 30.0, true),
        // Unsold units contribute nothing, not even a zero entry
        unit("Available", "Villa", "Cash", "2022-Q1", 99.0, false),
    ];

    let series = aggregate_by_quarter(&units);
    assert_eq!(series.labels, vec!["2023-Q4", "2024-Q1", "2024-Q2"]);
    assert_eq!(series.values, vec![20.0, 30.0, 10.0]);
}

#[test]
fn quarter_series_sorts_numerically_past_q9() {
    let units = vec![
        unit("Contracted", "Villa", "Cash", "2024-Q10", 1.0, true),
        unit("Contracted", "Villa", "Cash", "2024-Q9", 2.0, true),
    ];

    let series = aggregate_by_quarter(&units);
    // A string sort would put "2024-Q10" first
    assert_eq!(series.labels, vec!["2024-Q9", "2024-Q10"]);
}

#[test]
fn quarter_series_sums_values_per_quarter() {
    // 10 units, 6 sold: 3x 100 in Q1, 3x 50 in Q2
    let mut units = Vec::new();
    for _ in 0..3 {
        units.push(unit("Contracted", "Villa", "Cash", "2024-Q1", 100.0, true));
        units.push(unit("Contracted", "Villa", "Cash", "2024-Q2", 50.0, true));
    }
    for _ in 0..4 {
        units.push(unit("Available", "Villa", "Cash", "", 100.0, false));
    }

    let series = aggregate_by_quarter(&units);
    assert_eq!(series.labels, vec!["2024-Q1", "2024-Q2"]);
    assert_eq!(series.values, vec![300.0, 150.0]);
}

#[test]
fn quarter_series_is_empty_without_sold_units() {
    assert!(aggregate_by_quarter(&[]).is_empty());
    let units = vec![unit("Available", "Villa", "Cash", "2024-Q1", 1.0, false)];
    assert!(aggregate_by_quarter(&units).is_empty());
}

// ========================================
// PRICE STATISTICS
// ========================================

fn priced_unit(unit_model: &str, interest_free_price: f64) -> InventoryUnit {
    let mut u = unit("Available", unit_model, "Cash", "", 0.0, false);
    u.interest_free_price = interest_free_price;
    u
}

#[test]
fn price_stats_symmetric_average_resolves_to_max() {
    let units = vec![
        priced_unit("Villa", 100.0),
        priced_unit("Villa", 200.0),
        priced_unit("Villa", 300.0),
    ];

    let stats = aggregate_price_by_unit_model(&units);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].unit_model, "Villa");
    assert_eq!(stats[0].min, 100.0);
    assert_eq!(stats[0].max, 300.0);
    assert_eq!(stats[0].avg, 200.0);
    // Equidistant from both extremes: the tie goes to Max
    assert_eq!(stats[0].avg_closer_to, AvgCloserTo::Max);
}

#[test]
fn price_stats_detects_low_skew() {
    let units = vec![
        priced_unit("Studio", 100.0),
        priced_unit("Studio", 110.0),
        priced_unit("Studio", 400.0),
    ];

    let stats = aggregate_price_by_unit_model(&units);
    assert_eq!(stats[0].avg_closer_to, AvgCloserTo::Min);
}

#[test]
fn price_stats_follow_vocabulary_order_and_omit_empty_models() {
    let units = vec![
        priced_unit("Studio", 1.0),
        priced_unit("Garden", 2.0),
        priced_unit("Villa", 3.0),
        priced_unit("Chalet", 4.0), // not in the vocabulary: dropped
    ];

    let stats = aggregate_price_by_unit_model(&units);
    let models: Vec<&str> = stats.iter().map(|s| s.unit_model.as_str()).collect();
    assert_eq!(models, vec!["Garden", "Villa", "Studio"]);

    assert!(aggregate_price_by_unit_model(&[]).is_empty());
}

// ========================================
// PIVOT ROWS
// ========================================

#[test]
fn pivot_groups_by_selected_dimensions() {
    let units = sample_units();
    let rows = pivot_rows(&units, &[PivotDimension::Status]);

    let available = rows
        .iter()
        .find(|r| r.keys.as_slice() == ["Available"])
        .unwrap();
    assert_eq!(available.units, 2);
    assert_eq!(available.total_sales, 5_000_000.0);
    assert_eq!(available.avg_sales(), 2_500_000.0);

    // Sorted by key: Available < Contracted < Reserved
    let keys: Vec<&str> = rows.iter().map(|r| r.keys[0].as_str()).collect();
    assert_eq!(keys, vec!["Available", "Contracted", "Reserved"]);
}

#[test]
fn pivot_with_two_dimensions_builds_compound_keys() {
    let units = sample_units();
    let rows = pivot_rows(&units, &[PivotDimension::Status, PivotDimension::UnitModel]);

    assert_eq!(rows.len(), 5);
    let contracted_studio = rows
        .iter()
        .find(|r| r.keys.as_slice() == ["Contracted", "Studio"])
        .unwrap();
    assert_eq!(contracted_studio.units, 1);
}

#[test]
fn pivot_without_dimensions_is_a_grand_total() {
    let units = sample_units();
    let rows = pivot_rows(&units, &[]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].units, 5);
    assert_eq!(rows[0].total_sales, 14_200_000.0);

    assert!(pivot_rows(&[], &[PivotDimension::Status]).is_empty());
}

// ========================================
// FORMATTING
// ========================================

#[test]
fn thousands_formatting() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.0), "999");
    assert_eq!(format_thousands(1_000.0), "1,000");
    assert_eq!(format_thousands(1_234_567.8), "1,234,568");
    assert_eq!(format_thousands(-45_000.4), "-45,000");
}

#[test]
fn compact_formatting() {
    assert_eq!(format_compact(42.0), "42");
    assert_eq!(format_compact(42_000.0), "42K");
    assert_eq!(format_compact(1_300_000.0), "1.3M");
    assert_eq!(format_compact(2_000_000_000.0), "2B");
}

#[test]
fn percentage_share_is_zero_safe() {
    assert_eq!(percentage_share(1.0, 3.0), 33.3);
    assert_eq!(percentage_share(5.0, 5.0), 100.0);
    assert_eq!(percentage_share(1.0, 0.0), 0.0);
}
