//! Integration tests for table-level analyses.

use edastat_core::{
    analyze_categorical_columns, analyze_dataset, analyze_numeric_columns, overview,
};
use edastat_model::{CombinedRecord, EmptyColumnPolicy, NumericStats, StatsError, StatsOptions};
use polars::df;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

fn mixed_df() -> DataFrame {
    df! {
        "age" => &[Some(1i64), Some(2), Some(3), Some(4), Some(5), Some(100), None],
        "grade" => &[Some("a"), Some("a"), Some("b"), Some("c"), None, Some("b"), Some("a")],
        "score" => &[0.5, 1.5, 1.5, 2.5, 3.5, 4.5, 5.5],
    }
    .unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn numeric_analysis_skips_categorical_columns() {
    let stats = analyze_numeric_columns(&mixed_df(), &StatsOptions::default()).unwrap();

    let names: Vec<&str> = stats.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(names, vec!["age", "score"]);

    let age = &stats[0];
    assert_eq!(age.n, 6);
    assert_eq!(age.min, 1.0);
    assert_eq!(age.max, 100.0);
    assert!(close(age.median, 3.5));
    assert!(close(age.q1, 2.25));
    assert!(close(age.q3, 4.75));
    assert!(close(age.iqr, 2.5));
    assert!(close(age.lower_fence, -1.5));
    assert!(close(age.upper_fence, 8.5));
    assert_eq!(age.n_outliers, 1);
}

#[test]
fn categorical_analysis_skips_numeric_columns() {
    let stats = analyze_categorical_columns(&mixed_df(), &StatsOptions::default()).unwrap();

    assert_eq!(stats.len(), 1);
    let grade = &stats[0];
    assert_eq!(grade.column, "grade");
    assert_eq!(grade.n, 6);
    assert_eq!(grade.n_unique, 3);
    assert_eq!(grade.mode, "a");
    assert_eq!(grade.mode_count, 3);
    assert_eq!(grade.second_most_common.as_deref(), Some("b"));
    assert_eq!(grade.second_most_common_count, Some(2));
}

#[test]
fn overview_reports_each_column() {
    let records = overview(&mixed_df()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].column, "age");
    assert_eq!(records[0].types, "i64");
    assert_eq!(records[0].unique_data, 6);
    assert_eq!(records[0].missing_value, 1);
    assert_eq!(records[0].missing_percentage, 14.29);
    assert_eq!(records[1].types, "str");
    assert_eq!(records[1].unique_data, 3);
    assert_eq!(records[2].missing_value, 0);
    assert_eq!(records[2].missing_percentage, 0.0);
}

#[test]
fn missing_percentage_rounds_halves_to_even() {
    // (missing, rows) -> percentage, as Python's round(x, 2) reports it
    let table = [(1, 800, 0.12), (3, 800, 0.38), (5, 800, 0.62), (1, 7, 14.29), (1, 3, 33.33)];
    for (missing, rows, expected) in table {
        let cells: Vec<Option<i64>> = (0..rows)
            .map(|i| if i < missing { None } else { Some(i as i64) })
            .collect();
        let df = DataFrame::new(vec![Series::new("v".into(), cells).into_column()]).unwrap();
        let records = overview(&df).unwrap();
        assert_eq!(records[0].missing_value, missing);
        assert_eq!(records[0].missing_percentage, expected, "{missing} of {rows}");
    }
}

#[test]
fn overview_repeats_table_duplicate_count() {
    let df = df! {
        "id" => &[1i64, 2, 3, 4, 5, 6, 7, 8, 1, 2],
        "site" => &["n", "s", "e", "w", "n", "s", "e", "w", "n", "s"],
    }
    .unwrap();

    let records = overview(&df).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.duplicated == 2));
}

#[test]
fn dataset_analysis_keeps_column_order() {
    let records = analyze_dataset(&mixed_df(), &StatsOptions::default()).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.column.as_str()).collect();
    assert_eq!(names, vec!["age", "grade", "score"]);
}

#[test]
fn dataset_analysis_merges_stats_and_overview() {
    let records = analyze_dataset(&mixed_df(), &StatsOptions::default()).unwrap();

    let age = &records[0];
    assert!(age.is_numeric());
    assert_eq!(age.n, 6);
    assert_eq!(age.n_outliers, Some(1));
    assert_eq!(age.n_unique, 6);
    assert_eq!(age.mode, None);
    assert_eq!(age.missing_value, 1);
    assert_eq!(age.types, "i64");

    let grade = &records[1];
    assert!(!grade.is_numeric());
    assert_eq!(grade.n, 6);
    assert_eq!(grade.n_unique, 3);
    assert_eq!(grade.mode.as_deref(), Some("a"));
    assert_eq!(grade.mean, None);
    assert_eq!(grade.lower_fence, None);
    assert_eq!(grade.missing_value, 1);

    let score = &records[2];
    assert_eq!(score.n_unique, 6);
    assert_eq!(score.unique_data, 6);
    assert!(records.iter().all(|r| r.duplicated == 0));
}

fn with_empty_column() -> DataFrame {
    let empty: Vec<Option<f64>> = vec![None, None, None];
    let columns: Vec<Column> = vec![
        Series::new("x".into(), &[1.0, 2.0, 3.0]).into_column(),
        Series::new("blank".into(), empty).into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

#[test]
fn all_missing_column_fails_dataset_analysis() {
    let err = analyze_dataset(&with_empty_column(), &StatsOptions::default()).unwrap_err();
    assert!(matches!(err, StatsError::EmptyInput { ref column } if column == "blank"));
}

#[test]
fn all_missing_column_fails_numeric_analysis() {
    let err =
        analyze_numeric_columns(&with_empty_column(), &StatsOptions::default()).unwrap_err();
    assert!(matches!(err, StatsError::EmptyInput { .. }));
}

#[test]
fn all_missing_column_can_be_skipped() {
    let options = StatsOptions::new().with_empty_columns(EmptyColumnPolicy::Skip);
    let records = analyze_dataset(&with_empty_column(), &options).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].column, "x");
}

#[test]
fn invalid_fence_factor_is_rejected_up_front() {
    let options = StatsOptions::new().with_fence_factor(-2.0);
    let err = analyze_categorical_columns(&mixed_df(), &options).unwrap_err();
    assert!(matches!(err, StatsError::InvalidConfiguration { .. }));
}

#[test]
fn fence_factor_changes_outlier_count() {
    let df = df! {
        "x" => &[1.0, 2.0, 3.0, 4.0, 5.0, 9.0],
    }
    .unwrap();

    // q1 = 2.25, q3 = 4.75, iqr = 2.5
    let default = analyze_numeric_columns(&df, &StatsOptions::default()).unwrap();
    assert_eq!(default[0].n_outliers, 1);

    let wide = analyze_numeric_columns(&df, &StatsOptions::new().with_fence_factor(3.0)).unwrap();
    assert_eq!(wide[0].n_outliers, 0);
}

#[test]
fn undefined_moments_survive_json_export() {
    let df = df! {
        "single" => &[Some(42.0), None],
        "flat" => &[Some(4.0), Some(4.0)],
    }
    .unwrap();

    let stats = analyze_numeric_columns(&df, &StatsOptions::default()).unwrap();
    assert_eq!(stats[0].std_dev, None);
    assert_eq!(stats[1].std_dev, Some(0.0));
    assert_eq!(stats[1].skewness, None);
    let json = serde_json::to_string(&stats).unwrap();
    let round: Vec<NumericStats> = serde_json::from_str(&json).unwrap();
    assert_eq!(round, stats);

    let records = analyze_dataset(&df, &StatsOptions::default()).unwrap();
    let json = serde_json::to_string(&records).unwrap();
    let round: Vec<CombinedRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(round, records);
    assert!(round.iter().all(CombinedRecord::is_numeric));
}

#[test]
fn empty_table_gives_empty_results() {
    let df = DataFrame::empty();
    assert!(analyze_dataset(&df, &StatsOptions::default()).unwrap().is_empty());
    assert!(overview(&df).unwrap().is_empty());
}
