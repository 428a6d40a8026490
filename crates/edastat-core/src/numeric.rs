//! Numeric column statistics: moments, quartiles, and Tukey fences.

use edastat_model::{ColumnKind, MomentEstimator, NumericStats, Result, StatsError, StatsOptions};
use polars::prelude::Column;

use crate::column::{column_kind, dtype_name, numeric_values};

/// Relative tolerance under which the second central moment counts as zero.
const MOMENT_RESOLUTION: f64 = 1e-15;

/// Compute numeric statistics for a polars column.
///
/// Missing values (nulls and NaN) are dropped first.
///
/// # Errors
///
/// - [`StatsError::TypeMismatch`] if the column is not numeric
/// - [`StatsError::EmptyInput`] if no values remain after dropping missing ones
/// - [`StatsError::InvalidConfiguration`] for an invalid fence factor
pub fn numeric_column_stats(column: &Column, options: &StatsOptions) -> Result<NumericStats> {
    let name = column.name().as_str();
    if column_kind(column.dtype()) != ColumnKind::Numeric {
        return Err(StatsError::TypeMismatch {
            column: name.to_string(),
            expected: ColumnKind::Numeric,
            found: dtype_name(column),
        });
    }
    let values = numeric_values(column)?;
    describe_numeric(name, &values, options)
}

/// Compute numeric statistics over a slice of values.
///
/// NaN entries are treated as missing and ignored. Statistics that are
/// undefined for the sample (spread of a single value, shape of a constant
/// column) are `None`.
///
/// # Examples
///
/// ```
/// use edastat_core::describe_numeric;
/// use edastat_model::StatsOptions;
///
/// let stats = describe_numeric("x", &[1.0, 2.0, 3.0, 4.0, 5.0, 100.0], &StatsOptions::default())
///     .unwrap();
/// assert_eq!(stats.median, 3.5);
/// assert_eq!(stats.q1, 2.25);
/// assert_eq!(stats.q3, 4.75);
/// assert_eq!(stats.n_outliers, 1);
/// ```
pub fn describe_numeric(
    column: &str,
    values: &[f64],
    options: &StatsOptions,
) -> Result<NumericStats> {
    options.validate()?;

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return Err(StatsError::empty_input(column));
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let moments = Moments::from_values(&sorted);
    let (skewness, kurtosis) = match options.moment_estimator {
        MomentEstimator::Biased => (moments.skewness(), moments.excess_kurtosis()),
        MomentEstimator::Adjusted => (
            moments.adjusted_skewness(),
            moments.adjusted_excess_kurtosis(),
        ),
    };

    let q1 = percentile_sorted(&sorted, 0.25);
    let median = percentile_sorted(&sorted, 0.5);
    let q3 = percentile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - options.fence_factor * iqr;
    let upper_fence = q3 + options.fence_factor * iqr;
    let n_outliers = sorted
        .iter()
        .filter(|&&v| v < lower_fence || v > upper_fence)
        .count();

    Ok(NumericStats {
        column: column.to_string(),
        n,
        min: sorted[0],
        max: sorted[n - 1],
        mean: moments.mean,
        std_dev: moments.sample_variance().map(f64::sqrt),
        median,
        q1,
        q3,
        iqr,
        skewness,
        kurtosis,
        lower_fence,
        upper_fence,
        n_outliers,
    })
}

/// Percentile of sorted data by linear interpolation between closest ranks.
///
/// `p` is a fraction in `[0, 1]`; the rank is `(n - 1) * p`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let rank = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    if lower == upper || fraction == 0.0 {
        return sorted[lower];
    }
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Central moments of a sample.
#[derive(Debug, Clone, Copy)]
struct Moments {
    n: f64,
    mean: f64,
    m2: f64,
    m3: f64,
    m4: f64,
}

impl Moments {
    fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for &v in values {
            let d = v - mean;
            let d2 = d * d;
            s2 += d2;
            s3 += d2 * d;
            s4 += d2 * d2;
        }
        Self {
            n,
            mean,
            m2: s2 / n,
            m3: s3 / n,
            m4: s4 / n,
        }
    }

    /// Sample variance; undefined below two values.
    fn sample_variance(&self) -> Option<f64> {
        if self.n < 2.0 {
            return None;
        }
        Some(self.m2 * self.n / (self.n - 1.0))
    }

    fn is_constant(&self) -> bool {
        self.m2 <= (MOMENT_RESOLUTION * self.mean).powi(2)
    }

    fn skewness(&self) -> Option<f64> {
        if self.is_constant() {
            return None;
        }
        Some(self.m3 / self.m2.powf(1.5))
    }

    fn excess_kurtosis(&self) -> Option<f64> {
        if self.is_constant() {
            return None;
        }
        Some(self.m4 / (self.m2 * self.m2) - 3.0)
    }

    fn adjusted_skewness(&self) -> Option<f64> {
        let n = self.n;
        if n < 3.0 {
            return None;
        }
        self.skewness().map(|g1| g1 * (n * (n - 1.0)).sqrt() / (n - 2.0))
    }

    fn adjusted_excess_kurtosis(&self) -> Option<f64> {
        let n = self.n;
        if n < 4.0 {
            return None;
        }
        self.excess_kurtosis()
            .map(|g2| ((n + 1.0) * g2 + 6.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0)))
    }
}
