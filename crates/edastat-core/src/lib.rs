//! Descriptive statistics over polars DataFrames.
//!
//! This crate characterizes the columns of an in-memory table:
//!
//! - **numeric**: moments, linear-interpolation quartiles, and Tukey outlier fences
//! - **categorical**: frequency ranking with mode and runner-up
//! - **overview**: dtype, cardinality, missingness, and duplicate rows
//! - **analysis**: per-table dispatch on column kind, merging into one record
//! - **frame**: assembly of result records into DataFrames
//!
//! Every function is pure: the input table is only read, and results are
//! freshly allocated on each call.

pub mod analysis;
pub mod categorical;
pub mod column;
pub mod frame;
pub mod numeric;
pub mod overview;

pub use analysis::{analyze_categorical_columns, analyze_dataset, analyze_numeric_columns};
pub use categorical::{categorical_column_stats, describe_categorical, value_counts};
pub use column::column_kind;
pub use frame::{
    FrameRecord, categorical_stats_frame, dataset_frame, numeric_stats_frame, overview_frame,
};
pub use numeric::{describe_numeric, numeric_column_stats, percentile_sorted};
pub use overview::{column_overview, duplicate_row_count, missing_percentage, overview};
