//! Categorical column statistics: frequency ranking, mode, and runner-up.

use std::collections::HashMap;

use edastat_model::{CategoricalStats, ColumnKind, Result, StatsError};
use polars::prelude::Column;

use crate::column::{category_values, column_kind, dtype_name};

/// Compute categorical statistics for a polars column.
///
/// Values are compared by their `String` rendering; nulls are dropped first.
///
/// # Errors
///
/// - [`StatsError::TypeMismatch`] if the column is numeric
/// - [`StatsError::EmptyInput`] if the column has no non-null values
pub fn categorical_column_stats(column: &Column) -> Result<CategoricalStats> {
    let name = column.name().as_str();
    if column_kind(column.dtype()) != ColumnKind::Categorical {
        return Err(StatsError::TypeMismatch {
            column: name.to_string(),
            expected: ColumnKind::Categorical,
            found: dtype_name(column),
        });
    }
    let values = category_values(column)?;
    describe_categorical(name, &values)
}

/// Compute categorical statistics over a slice of values.
///
/// Ties in frequency are broken by first occurrence, so the ranking is
/// deterministic for a given input order.
///
/// # Examples
///
/// ```
/// use edastat_core::describe_categorical;
///
/// let stats = describe_categorical("grade", &["a", "a", "b", "c"]).unwrap();
/// assert_eq!(stats.mode, "a");
/// assert_eq!(stats.mode_count, 2);
/// assert_eq!(stats.second_most_common.as_deref(), Some("b"));
/// assert_eq!(stats.second_most_common_count, Some(1));
/// ```
pub fn describe_categorical<S: AsRef<str>>(column: &str, values: &[S]) -> Result<CategoricalStats> {
    let ranked = value_counts(values);
    let Some((mode, mode_count)) = ranked.first().cloned() else {
        return Err(StatsError::empty_input(column));
    };
    let runner_up = ranked.get(1).cloned();

    Ok(CategoricalStats {
        column: column.to_string(),
        n: values.len(),
        n_unique: ranked.len(),
        mode,
        mode_count,
        second_most_common: runner_up.as_ref().map(|(value, _)| value.clone()),
        second_most_common_count: runner_up.map(|(_, count)| count),
    })
}

/// Frequency table sorted by count descending, ties in first-seen order.
pub fn value_counts<S: AsRef<str>>(values: &[S]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        let value = value.as_ref();
        match index.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
