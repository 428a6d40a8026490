//! Error types for statistics computation.

use thiserror::Error;

use crate::kind::ColumnKind;

/// Errors that can occur while summarizing a table.
#[derive(Debug, Error)]
pub enum StatsError {
    // === Input Errors ===
    /// Statistics were requested on a column with no non-missing values.
    #[error("column '{column}' has no non-missing values")]
    EmptyInput { column: String },

    /// Statistics of one kind were requested on a column of the other kind.
    #[error("column '{column}' is {found}, expected {expected} data")]
    TypeMismatch {
        column: String,
        expected: ColumnKind,
        found: String,
    },

    // === Configuration Errors ===
    /// An option is outside its accepted range.
    #[error("invalid {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl StatsError {
    pub fn empty_input(column: impl Into<String>) -> Self {
        Self::EmptyInput {
            column: column.into(),
        }
    }
}

#[cfg(feature = "polars")]
impl From<polars::prelude::PolarsError> for StatsError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
