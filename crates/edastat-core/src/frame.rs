//! Result table assembly.
//!
//! Records are turned into polars DataFrames with a fixed schema: counts
//! are `UInt64`, statistics `Float64`, values and names `String`. Fields
//! that are optional in the record become nullable columns.

use edastat_model::{
    CategoricalStats, CombinedRecord, NumericStats, OverviewRecord, Result, StatsOptions,
};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use crate::analysis::{analyze_categorical_columns, analyze_dataset, analyze_numeric_columns};
use crate::overview::overview;

/// Record types that can be assembled into a result table.
pub trait FrameRecord: Sized {
    /// Column names of the result table, in order.
    const SCHEMA: &'static [&'static str];

    /// Build the result table. An empty slice gives a zero-row table with
    /// the full schema.
    fn to_frame(records: &[Self]) -> Result<DataFrame>;
}

fn text<R>(name: &str, records: &[R], get: impl Fn(&R) -> String) -> Column {
    Series::new(name.into(), records.iter().map(get).collect::<Vec<String>>()).into_column()
}

fn opt_text<R>(name: &str, records: &[R], get: impl Fn(&R) -> Option<String>) -> Column {
    Series::new(
        name.into(),
        records.iter().map(get).collect::<Vec<Option<String>>>(),
    )
    .into_column()
}

fn count<R>(name: &str, records: &[R], get: impl Fn(&R) -> usize) -> Column {
    Series::new(
        name.into(),
        records
            .iter()
            .map(|r| get(r) as u64)
            .collect::<Vec<u64>>(),
    )
    .into_column()
}

fn opt_count<R>(name: &str, records: &[R], get: impl Fn(&R) -> Option<usize>) -> Column {
    Series::new(
        name.into(),
        records
            .iter()
            .map(|r| get(r).map(|v| v as u64))
            .collect::<Vec<Option<u64>>>(),
    )
    .into_column()
}

fn float<R>(name: &str, records: &[R], get: impl Fn(&R) -> f64) -> Column {
    Series::new(name.into(), records.iter().map(get).collect::<Vec<f64>>()).into_column()
}

fn opt_float<R>(name: &str, records: &[R], get: impl Fn(&R) -> Option<f64>) -> Column {
    Series::new(
        name.into(),
        records.iter().map(get).collect::<Vec<Option<f64>>>(),
    )
    .into_column()
}

impl FrameRecord for NumericStats {
    const SCHEMA: &'static [&'static str] = &[
        "column",
        "n",
        "min",
        "max",
        "mean",
        "std",
        "median",
        "q1",
        "q3",
        "iqr",
        "skewness",
        "kurtosis",
        "lower_fence",
        "upper_fence",
        "n_outliers",
    ];

    fn to_frame(records: &[Self]) -> Result<DataFrame> {
        let columns = vec![
            text("column", records, |r| r.column.clone()),
            count("n", records, |r| r.n),
            float("min", records, |r| r.min),
            float("max", records, |r| r.max),
            float("mean", records, |r| r.mean),
            opt_float("std", records, |r| r.std_dev),
            float("median", records, |r| r.median),
            float("q1", records, |r| r.q1),
            float("q3", records, |r| r.q3),
            float("iqr", records, |r| r.iqr),
            opt_float("skewness", records, |r| r.skewness),
            opt_float("kurtosis", records, |r| r.kurtosis),
            float("lower_fence", records, |r| r.lower_fence),
            float("upper_fence", records, |r| r.upper_fence),
            count("n_outliers", records, |r| r.n_outliers),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

impl FrameRecord for CategoricalStats {
    const SCHEMA: &'static [&'static str] = &[
        "column",
        "n",
        "n_unique",
        "mode",
        "mode_count",
        "second_most_common",
        "second_most_common_count",
    ];

    fn to_frame(records: &[Self]) -> Result<DataFrame> {
        let columns = vec![
            text("column", records, |r| r.column.clone()),
            count("n", records, |r| r.n),
            count("n_unique", records, |r| r.n_unique),
            text("mode", records, |r| r.mode.clone()),
            count("mode_count", records, |r| r.mode_count),
            opt_text("second_most_common", records, |r| {
                r.second_most_common.clone()
            }),
            opt_count("second_most_common_count", records, |r| {
                r.second_most_common_count
            }),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

impl FrameRecord for OverviewRecord {
    const SCHEMA: &'static [&'static str] = &[
        "column",
        "types",
        "unique_data",
        "missing_value",
        "missing_percentage",
        "duplicated",
    ];

    fn to_frame(records: &[Self]) -> Result<DataFrame> {
        let columns = vec![
            text("column", records, |r| r.column.clone()),
            text("types", records, |r| r.types.clone()),
            count("unique_data", records, |r| r.unique_data),
            count("missing_value", records, |r| r.missing_value),
            float("missing_percentage", records, |r| r.missing_percentage),
            count("duplicated", records, |r| r.duplicated),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

impl FrameRecord for CombinedRecord {
    const SCHEMA: &'static [&'static str] = &[
        "column",
        "n",
        "min",
        "max",
        "mean",
        "std",
        "median",
        "q1",
        "q3",
        "iqr",
        "skewness",
        "kurtosis",
        "lower_fence",
        "upper_fence",
        "n_outliers",
        "n_unique",
        "mode",
        "mode_count",
        "second_most_common",
        "second_most_common_count",
        "types",
        "unique_data",
        "missing_value",
        "missing_percentage",
        "duplicated",
    ];

    fn to_frame(records: &[Self]) -> Result<DataFrame> {
        let columns = vec![
            text("column", records, |r| r.column.clone()),
            count("n", records, |r| r.n),
            opt_float("min", records, |r| r.min),
            opt_float("max", records, |r| r.max),
            opt_float("mean", records, |r| r.mean),
            opt_float("std", records, |r| r.std_dev),
            opt_float("median", records, |r| r.median),
            opt_float("q1", records, |r| r.q1),
            opt_float("q3", records, |r| r.q3),
            opt_float("iqr", records, |r| r.iqr),
            opt_float("skewness", records, |r| r.skewness),
            opt_float("kurtosis", records, |r| r.kurtosis),
            opt_float("lower_fence", records, |r| r.lower_fence),
            opt_float("upper_fence", records, |r| r.upper_fence),
            opt_count("n_outliers", records, |r| r.n_outliers),
            count("n_unique", records, |r| r.n_unique),
            opt_text("mode", records, |r| r.mode.clone()),
            opt_count("mode_count", records, |r| r.mode_count),
            opt_text("second_most_common", records, |r| {
                r.second_most_common.clone()
            }),
            opt_count("second_most_common_count", records, |r| {
                r.second_most_common_count
            }),
            text("types", records, |r| r.types.clone()),
            count("unique_data", records, |r| r.unique_data),
            count("missing_value", records, |r| r.missing_value),
            float("missing_percentage", records, |r| r.missing_percentage),
            count("duplicated", records, |r| r.duplicated),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

/// Numeric statistics result table.
pub fn numeric_stats_frame(df: &DataFrame, options: &StatsOptions) -> Result<DataFrame> {
    NumericStats::to_frame(&analyze_numeric_columns(df, options)?)
}

/// Categorical statistics result table.
pub fn categorical_stats_frame(df: &DataFrame, options: &StatsOptions) -> Result<DataFrame> {
    CategoricalStats::to_frame(&analyze_categorical_columns(df, options)?)
}

/// Overview result table.
pub fn overview_frame(df: &DataFrame) -> Result<DataFrame> {
    OverviewRecord::to_frame(&overview(df)?)
}

/// Unified per-column result table.
pub fn dataset_frame(df: &DataFrame, options: &StatsOptions) -> Result<DataFrame> {
    CombinedRecord::to_frame(&analyze_dataset(df, options)?)
}
