//! Input validation shared by every entry point.

use rocauc_core::{AucError, BinaryLabel, Result};

/// Number of positive and negative labels in an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClassCounts {
    pub positive: usize,
    pub negative: usize,
}

impl ClassCounts {
    /// Total number of labelled items.
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Number of (positive, negative) pairs, the AUC denominator.
    pub fn pairs(&self) -> u128 {
        self.positive as u128 * self.negative as u128
    }
}

/// Scores and labels that passed validation.
#[derive(Debug, Clone)]
pub(crate) struct Validated {
    /// Labels converted to `true` = positive.
    pub labels: Vec<bool>,
    pub counts: ClassCounts,
}

/// Check the input contract and count both classes.
///
/// # Errors
///
/// - [`AucError::InvalidInput`] if the lengths differ, a score is NaN or
///   infinite, or a label is not binary.
/// - [`AucError::DegenerateInput`] if either class is absent, including the
///   empty input.
pub(crate) fn validate<L: BinaryLabel>(scores: &[f64], labels: &[L]) -> Result<Validated> {
    if scores.len() != labels.len() {
        tracing::debug!(
            scores = scores.len(),
            labels = labels.len(),
            "rejecting input with mismatched lengths"
        );
        return Err(AucError::InvalidInput(format!(
            "scores length {} != labels length {}",
            scores.len(),
            labels.len()
        )));
    }

    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        tracing::debug!(index, %value, "rejecting non-finite score");
        return Err(AucError::InvalidInput(format!(
            "score at index {index} is not finite ({value})"
        )));
    }

    let labels = labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            label.as_positive().ok_or_else(|| {
                AucError::InvalidInput(format!("label at index {index} is not 0 or 1"))
            })
        })
        .collect::<Result<Vec<bool>>>()?;

    let positive = labels.iter().filter(|&&l| l).count();
    let counts = ClassCounts {
        positive,
        negative: labels.len() - positive,
    };
    if counts.positive == 0 || counts.negative == 0 {
        tracing::debug!(
            positive = counts.positive,
            negative = counts.negative,
            "rejecting single-class input"
        );
        return Err(AucError::DegenerateInput {
            positive: counts.positive,
            negative: counts.negative,
        });
    }

    Ok(Validated { labels, counts })
}
