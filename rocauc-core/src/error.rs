//! Structured error types for the rocauc workspace.

use thiserror::Error;

/// Unified error type for all AUC operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "detail", rename_all = "snake_case"))]
pub enum AucError {
    /// Invalid input (mismatched lengths, non-finite scores, non-binary labels)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One of the two classes is absent, so the ROC curve is undefined
    #[error(
        "degenerate input: AUC is undefined with {positive} positive and {negative} negative labels"
    )]
    DegenerateInput {
        /// Number of positive labels seen.
        positive: usize,
        /// Number of negative labels seen.
        negative: usize,
    },
}

impl AucError {
    /// Whether this is an [`AucError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AucError::InvalidInput(_))
    }

    /// Whether this is an [`AucError::DegenerateInput`].
    pub fn is_degenerate(&self) -> bool {
        matches!(self, AucError::DegenerateInput { .. })
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, AucError>;
