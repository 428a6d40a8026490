//! Data model for tabular descriptive statistics.
//!
//! This crate holds the plain types shared by the statistics engine:
//!
//! - **kind**: numeric vs categorical column classification
//! - **records**: fixed-schema result records for each analysis
//! - **options**: tunables such as the Tukey fence factor
//! - **error**: the error type returned by every analysis

pub mod error;
pub mod kind;
pub mod options;
pub mod records;

pub use error::{Result, StatsError};
pub use kind::ColumnKind;
pub use options::{EmptyColumnPolicy, MomentEstimator, StatsOptions};
pub use records::{CategoricalStats, CombinedRecord, NumericStats, OverviewRecord};
