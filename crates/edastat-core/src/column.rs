//! Column classification and value extraction.
//!
//! Missing values are nulls, plus NaN in floating-point columns. Non-float
//! columns are compared through their polars `String` rendering, so every
//! dtype that casts to `String` can be counted and ranked.

use std::collections::HashSet;

use edastat_model::{ColumnKind, Result};
use polars::prelude::{Column, DataType};

/// Hashable identity of one cell, used for distinct and duplicate counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum CellKey {
    Missing,
    /// Bit pattern of a float, with `-0.0` folded into `0.0`.
    Number(u64),
    Text(String),
}

impl CellKey {
    fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Classify a column from its declared dtype.
///
/// Integers and floats are numeric; booleans, strings, temporal and all
/// other dtypes are categorical.
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => ColumnKind::Numeric,
        _ => ColumnKind::Categorical,
    }
}

fn is_float(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Declared dtype name as reported in the overview.
pub fn dtype_name(column: &Column) -> String {
    column.dtype().to_string()
}

/// Non-missing values of a numeric column as `f64`.
pub fn numeric_values(column: &Column) -> Result<Vec<f64>> {
    let cast = column.cast(&DataType::Float64)?;
    let values = cast.f64()?;
    Ok(values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_nan())
        .collect())
}

/// Non-missing values of a column rendered as strings.
pub fn category_values(column: &Column) -> Result<Vec<String>> {
    let cast = column.cast(&DataType::String)?;
    let values = cast.str()?;
    Ok(values.iter().flatten().map(str::to_string).collect())
}

/// One key per row, preserving row order.
pub(crate) fn cell_keys(column: &Column) -> Result<Vec<CellKey>> {
    if is_float(column.dtype()) {
        let cast = column.cast(&DataType::Float64)?;
        let values = cast.f64()?;
        return Ok(values
            .into_iter()
            .map(|value| match value {
                Some(v) if !v.is_nan() => CellKey::Number(canonical_bits(v)),
                _ => CellKey::Missing,
            })
            .collect());
    }
    let cast = column.cast(&DataType::String)?;
    let values = cast.str()?;
    Ok(values
        .iter()
        .map(|value| match value {
            Some(v) => CellKey::Text(v.to_string()),
            None => CellKey::Missing,
        })
        .collect())
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Missing-cell count over the full column.
pub(crate) fn missing_count(keys: &[CellKey]) -> usize {
    keys.iter().filter(|key| key.is_missing()).count()
}

/// Distinct non-missing values.
pub(crate) fn distinct_count(keys: &[CellKey]) -> usize {
    keys.iter()
        .filter(|key| !key.is_missing())
        .collect::<HashSet<_>>()
        .len()
}
