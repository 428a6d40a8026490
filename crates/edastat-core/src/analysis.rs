//! Table-level analyses.
//!
//! Each column is processed independently and results are emitted in
//! column order. Columns are classified once from their declared dtype.

use edastat_model::{
    CategoricalStats, ColumnKind, CombinedRecord, EmptyColumnPolicy, NumericStats, Result,
    StatsError, StatsOptions,
};
use polars::prelude::{Column, DataFrame};

use crate::categorical::categorical_column_stats;
use crate::column::column_kind;
use crate::numeric::numeric_column_stats;
use crate::overview::{column_overview, duplicate_row_count};

/// Numeric statistics for every numeric column; other columns are skipped.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for an all-missing numeric column
/// unless `options.empty_columns` is [`EmptyColumnPolicy::Skip`].
pub fn analyze_numeric_columns(
    df: &DataFrame,
    options: &StatsOptions,
) -> Result<Vec<NumericStats>> {
    options.validate()?;
    let mut results = Vec::new();
    for column in columns_of_kind(df, ColumnKind::Numeric) {
        if let Some(stats) = skip_if_empty(numeric_column_stats(column, options), options)? {
            results.push(stats);
        }
    }
    Ok(results)
}

/// Categorical statistics for every non-numeric column; numeric columns are skipped.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for an all-missing categorical column
/// unless `options.empty_columns` is [`EmptyColumnPolicy::Skip`].
pub fn analyze_categorical_columns(
    df: &DataFrame,
    options: &StatsOptions,
) -> Result<Vec<CategoricalStats>> {
    options.validate()?;
    let mut results = Vec::new();
    for column in columns_of_kind(df, ColumnKind::Categorical) {
        if let Some(stats) = skip_if_empty(categorical_column_stats(column), options)? {
            results.push(stats);
        }
    }
    Ok(results)
}

/// One combined record per column: kind-specific statistics merged with
/// the column overview.
///
/// Statistics are computed over non-missing values, the overview over the
/// full column. The output has exactly one row per input column, in input
/// order, unless all-missing columns are skipped by policy.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for an all-missing column under the
/// default [`EmptyColumnPolicy::Error`]; no partial result is returned.
pub fn analyze_dataset(df: &DataFrame, options: &StatsOptions) -> Result<Vec<CombinedRecord>> {
    options.validate()?;
    let duplicated = duplicate_row_count(df)?;
    let mut results = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        if let Some(record) = skip_if_empty(combined_record(column, duplicated, options), options)? {
            results.push(record);
        }
    }
    Ok(results)
}

fn combined_record(
    column: &Column,
    duplicated: usize,
    options: &StatsOptions,
) -> Result<CombinedRecord> {
    let kind = column_kind(column.dtype());
    let overview = column_overview(column, duplicated)?;
    tracing::debug!(
        column = %column.name(),
        kind = %kind,
        rows = column.len(),
        missing = overview.missing_value,
        "Analyzing column"
    );
    let record = match kind {
        ColumnKind::Numeric => {
            CombinedRecord::from_numeric(numeric_column_stats(column, options)?, overview)
        }
        ColumnKind::Categorical => {
            CombinedRecord::from_categorical(categorical_column_stats(column)?, overview)
        }
    };
    Ok(record)
}

fn columns_of_kind(df: &DataFrame, kind: ColumnKind) -> impl Iterator<Item = &Column> {
    df.get_columns()
        .iter()
        .filter(move |column| column_kind(column.dtype()) == kind)
}

/// Apply the empty-column policy to a per-column result.
fn skip_if_empty<T>(result: Result<T>, options: &StatsOptions) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StatsError::EmptyInput { column })
            if options.empty_columns == EmptyColumnPolicy::Skip =>
        {
            tracing::warn!(column = %column, "Skipping column with no non-missing values");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
