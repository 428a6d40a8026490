//! Fixed-schema result records.
//!
//! Each analysis produces one record per column. The field order of every
//! struct is the column order of the corresponding result table.

use serde::{Deserialize, Serialize};

/// Moment, quantile, and outlier statistics for one numeric column.
///
/// Computed over non-missing values only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub column: String,
    /// Number of non-missing values.
    pub n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (denominator `n - 1`); `None` for a single value.
    #[serde(rename = "std")]
    pub std_dev: Option<f64>,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
    /// `None` when the column is constant or too short for the estimator.
    pub skewness: Option<f64>,
    /// Excess kurtosis (normal distribution = 0). Undefined like `skewness`.
    pub kurtosis: Option<f64>,
    /// `q1 - k * iqr`.
    pub lower_fence: f64,
    /// `q3 + k * iqr`.
    pub upper_fence: f64,
    /// Values strictly outside `[lower_fence, upper_fence]`.
    pub n_outliers: usize,
}

/// Frequency statistics for one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalStats {
    pub column: String,
    /// Number of non-missing values.
    pub n: usize,
    /// Number of distinct non-missing values.
    pub n_unique: usize,
    pub mode: String,
    pub mode_count: usize,
    /// Runner-up value; absent when the column has a single distinct value.
    pub second_most_common: Option<String>,
    pub second_most_common_count: Option<usize>,
}

impl CategoricalStats {
    pub fn has_runner_up(&self) -> bool {
        self.second_most_common.is_some()
    }
}

/// Type, cardinality, and missingness metadata for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewRecord {
    pub column: String,
    /// Declared dtype name.
    pub types: String,
    /// Distinct non-missing values.
    pub unique_data: usize,
    pub missing_value: usize,
    /// `missing_value / rows * 100`, rounded to two decimals.
    pub missing_percentage: f64,
    /// Rows equal to an earlier row. A table-level count, repeated per column.
    pub duplicated: usize,
}

/// Unified per-column record: numeric and categorical statistics plus overview.
///
/// Fields that do not apply to the column's kind are `None`. For numeric
/// columns `std`, `skewness` and `kurtosis` may also be `None` when the
/// statistic is undefined for the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub column: String,
    pub n: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    #[serde(rename = "std")]
    pub std_dev: Option<f64>,
    pub median: Option<f64>,
    pub q1: Option<f64>,
    pub q3: Option<f64>,
    pub iqr: Option<f64>,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub lower_fence: Option<f64>,
    pub upper_fence: Option<f64>,
    pub n_outliers: Option<usize>,
    pub n_unique: usize,
    pub mode: Option<String>,
    pub mode_count: Option<usize>,
    pub second_most_common: Option<String>,
    pub second_most_common_count: Option<usize>,
    pub types: String,
    pub unique_data: usize,
    pub missing_value: usize,
    pub missing_percentage: f64,
    pub duplicated: usize,
}

impl CombinedRecord {
    /// Merge numeric statistics with the column overview.
    ///
    /// `n_unique` is taken from the overview's distinct count.
    pub fn from_numeric(stats: NumericStats, overview: OverviewRecord) -> Self {
        Self {
            column: stats.column,
            n: stats.n,
            min: Some(stats.min),
            max: Some(stats.max),
            mean: Some(stats.mean),
            std_dev: stats.std_dev,
            median: Some(stats.median),
            q1: Some(stats.q1),
            q3: Some(stats.q3),
            iqr: Some(stats.iqr),
            skewness: stats.skewness,
            kurtosis: stats.kurtosis,
            lower_fence: Some(stats.lower_fence),
            upper_fence: Some(stats.upper_fence),
            n_outliers: Some(stats.n_outliers),
            n_unique: overview.unique_data,
            mode: None,
            mode_count: None,
            second_most_common: None,
            second_most_common_count: None,
            types: overview.types,
            unique_data: overview.unique_data,
            missing_value: overview.missing_value,
            missing_percentage: overview.missing_percentage,
            duplicated: overview.duplicated,
        }
    }

    /// Merge categorical statistics with the column overview.
    pub fn from_categorical(stats: CategoricalStats, overview: OverviewRecord) -> Self {
        Self {
            column: stats.column,
            n: stats.n,
            min: None,
            max: None,
            mean: None,
            std_dev: None,
            median: None,
            q1: None,
            q3: None,
            iqr: None,
            skewness: None,
            kurtosis: None,
            lower_fence: None,
            upper_fence: None,
            n_outliers: None,
            n_unique: stats.n_unique,
            mode: Some(stats.mode),
            mode_count: Some(stats.mode_count),
            second_most_common: stats.second_most_common,
            second_most_common_count: stats.second_most_common_count,
            types: overview.types,
            unique_data: overview.unique_data,
            missing_value: overview.missing_value,
            missing_percentage: overview.missing_percentage,
            duplicated: overview.duplicated,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.mean.is_some()
    }
}
