//! Configuration options for statistics computation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// Tukey's conventional fence multiplier.
pub const DEFAULT_FENCE_FACTOR: f64 = 1.5;

/// Estimator used for skewness and excess kurtosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MomentEstimator {
    /// Population moment ratios: g1 = m3 / m2^1.5, g2 = m4 / m2^2 - 3.
    #[default]
    Biased,
    /// Sample-size adjusted G1 and G2.
    Adjusted,
}

/// What the table-level analyses do with columns that are entirely missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyColumnPolicy {
    /// Propagate [`StatsError::EmptyInput`] to the caller.
    #[default]
    Error,
    /// Leave the column out of the result.
    Skip,
}

/// Options controlling descriptive statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsOptions {
    /// Multiplier `k` applied to the IQR when placing the outlier fences.
    pub fence_factor: f64,

    /// Skewness and kurtosis estimator.
    pub moment_estimator: MomentEstimator,

    /// Handling of all-missing columns in table-level analyses.
    pub empty_columns: EmptyColumnPolicy,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            fence_factor: DEFAULT_FENCE_FACTOR,
            moment_estimator: MomentEstimator::default(),
            empty_columns: EmptyColumnPolicy::default(),
        }
    }
}

impl StatsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Tukey fence factor.
    #[must_use]
    pub fn with_fence_factor(mut self, factor: f64) -> Self {
        self.fence_factor = factor;
        self
    }

    /// Set the skewness/kurtosis estimator.
    #[must_use]
    pub fn with_moment_estimator(mut self, estimator: MomentEstimator) -> Self {
        self.moment_estimator = estimator;
        self
    }

    /// Set the all-missing column policy.
    #[must_use]
    pub fn with_empty_columns(mut self, policy: EmptyColumnPolicy) -> Self {
        self.empty_columns = policy;
        self
    }

    /// Check that every option is within its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidConfiguration`] when the fence factor is
    /// negative, NaN, or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.fence_factor.is_finite() {
            return Err(StatsError::InvalidConfiguration {
                field: "fence_factor".to_string(),
                reason: format!("must be finite, got {}", self.fence_factor),
            });
        }
        if self.fence_factor < 0.0 {
            return Err(StatsError::InvalidConfiguration {
                field: "fence_factor".to_string(),
                reason: format!("must be non-negative, got {}", self.fence_factor),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tukey() {
        let options = StatsOptions::default();
        assert_eq!(options.fence_factor, 1.5);
        assert_eq!(options.moment_estimator, MomentEstimator::Biased);
        assert_eq!(options.empty_columns, EmptyColumnPolicy::Error);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn zero_fence_factor_is_valid() {
        assert!(StatsOptions::new().with_fence_factor(0.0).validate().is_ok());
    }

    #[test]
    fn negative_fence_factor_is_rejected() {
        let err = StatsOptions::new()
            .with_fence_factor(-0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, StatsError::InvalidConfiguration { .. }));
    }

    #[test]
    fn nan_fence_factor_is_rejected() {
        assert!(
            StatsOptions::new()
                .with_fence_factor(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
