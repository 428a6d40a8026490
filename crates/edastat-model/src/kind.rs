//! Column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a column is summarized, decided once from its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating-point data: moments, quartiles, and fences.
    Numeric,
    /// Everything else: frequency ranking.
    Categorical,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Numeric)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
