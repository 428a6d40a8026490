//! Table overview: dtype, cardinality, missingness, and duplicate rows.

use std::collections::HashSet;

use edastat_model::{OverviewRecord, Result};
use polars::prelude::{Column, DataFrame};

use crate::column::{CellKey, cell_keys, distinct_count, dtype_name, missing_count};

/// Compute one overview record per column, in column order.
///
/// The duplicate-row count is computed once and repeated in every record.
pub fn overview(df: &DataFrame) -> Result<Vec<OverviewRecord>> {
    let duplicated = duplicate_row_count(df)?;
    df.get_columns()
        .iter()
        .map(|column| column_overview(column, duplicated))
        .collect()
}

/// Overview metadata for one column, given the table's duplicate-row count.
pub fn column_overview(column: &Column, duplicated: usize) -> Result<OverviewRecord> {
    let keys = cell_keys(column)?;
    let missing = missing_count(&keys);
    Ok(OverviewRecord {
        column: column.name().to_string(),
        types: dtype_name(column),
        unique_data: distinct_count(&keys),
        missing_value: missing,
        missing_percentage: missing_percentage(missing, column.len()),
        duplicated,
    })
}

/// Number of rows that exactly repeat an earlier row.
///
/// Missing cells compare equal to each other.
pub fn duplicate_row_count(df: &DataFrame) -> Result<usize> {
    let columns = df
        .get_columns()
        .iter()
        .map(cell_keys)
        .collect::<Result<Vec<_>>>()?;

    let mut seen: HashSet<Vec<&CellKey>> = HashSet::with_capacity(df.height());
    let mut duplicated = 0usize;
    for row in 0..df.height() {
        let key: Vec<&CellKey> = columns.iter().map(|keys| &keys[row]).collect();
        if !seen.insert(key) {
            duplicated += 1;
        }
    }

    tracing::debug!(
        rows = df.height(),
        columns = df.width(),
        duplicated,
        "Counted duplicate rows"
    );
    Ok(duplicated)
}

/// `missing / total * 100` rounded to two decimals, halves to even; 0 for an
/// empty column.
pub fn missing_percentage(missing: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = missing as f64 / total as f64 * 100.0;
    (pct * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_missing_percentage_rounding() {
        assert_eq!(missing_percentage(1, 3), 33.33);
        assert_eq!(missing_percentage(2, 3), 66.67);
        assert_eq!(missing_percentage(0, 5), 0.0);
        assert_eq!(missing_percentage(5, 5), 100.0);
        assert_eq!(missing_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_missing_percentage_rounds_halves_to_even() {
        assert_eq!(missing_percentage(1, 800), 0.12);
        assert_eq!(missing_percentage(3, 800), 0.38);
        assert_eq!(missing_percentage(5, 800), 0.62);
        assert_eq!(missing_percentage(1, 8), 12.5);
    }

    #[test]
    fn test_duplicate_rows_consider_all_columns() {
        let df = df! {
            "a" => &[1i64, 1, 1, 2],
            "b" => &["x", "x", "y", "x"],
        }
        .unwrap();
        assert_eq!(duplicate_row_count(&df).unwrap(), 1);
    }

    #[test]
    fn test_duplicate_rows_treat_missing_as_equal() {
        let df = df! {
            "a" => &[Some(1.0), None, None, Some(f64::NAN)],
            "b" => &[Some("x"), None, None, None],
        }
        .unwrap();
        // rows 2 and 3 repeat row 1 (NaN counts as missing)
        assert_eq!(duplicate_row_count(&df).unwrap(), 2);
    }

    #[test]
    fn test_column_overview() {
        let df = df! {
            "grade" => &[Some("a"), None, Some("b"), Some("a")],
        }
        .unwrap();
        let record = column_overview(df.column("grade").unwrap(), 0).unwrap();
        assert_eq!(record.column, "grade");
        assert_eq!(record.types, "str");
        assert_eq!(record.unique_data, 2);
        assert_eq!(record.missing_value, 1);
        assert_eq!(record.missing_percentage, 25.0);
    }
}
