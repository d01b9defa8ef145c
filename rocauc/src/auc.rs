//! Area under the ROC curve.
//!
//! Scores are sorted once and the area is integrated analytically during a
//! single ascending threshold sweep, with no pairwise comparison and no
//! explicit curve. See [`TiePolicy`] for how equal scores are handled.

use rocauc_core::{BinaryLabel, Result, Scored, Summarizable};

use crate::config::{AucConfig, TiePolicy};
use crate::sweep::{Ranked, Sweep};

/// Compute the AUC of `scores` against binary `labels` with the default
/// configuration (batched ties).
///
/// The result is the probability that a randomly chosen positive is scored
/// above a randomly chosen negative, with ties counting one half.
///
/// # Errors
///
/// - [`AucError::InvalidInput`](rocauc_core::AucError::InvalidInput) if the
///   lengths differ, a score is not finite, or a label is not binary.
/// - [`AucError::DegenerateInput`](rocauc_core::AucError::DegenerateInput)
///   if only one class is present.
pub fn compute_auc<L: BinaryLabel>(scores: &[f64], labels: &[L]) -> Result<f64> {
    compute_auc_with(scores, labels, &AucConfig::default())
}

/// Compute the AUC with an explicit [`AucConfig`].
///
/// # Errors
///
/// Same as [`compute_auc`].
pub fn compute_auc_with<L: BinaryLabel>(
    scores: &[f64],
    labels: &[L],
    config: &AucConfig,
) -> Result<f64> {
    Ok(auc_report(scores, labels, config)?.auc)
}

/// AUC together with the class counts and tie statistics of the input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AucReport {
    /// Area under the ROC curve, in `[0, 1]`.
    pub auc: f64,
    /// Number of positive labels.
    pub positive_count: usize,
    /// Number of negative labels.
    pub negative_count: usize,
    /// Number of distinct scores shared by more than one item.
    pub tie_groups: usize,
    /// Tie handling used for the sweep.
    pub tie_policy: TiePolicy,
    /// Mann-Whitney U: `auc · positive_count · negative_count`.
    pub u_statistic: f64,
}

impl Scored for AucReport {
    fn score(&self) -> f64 {
        self.auc
    }
}

impl Summarizable for AucReport {
    fn summary(&self) -> String {
        format!(
            "ROC AUC: auc={:.6}, positive={}, negative={}, U={:.1}, tie_groups={} ({})",
            self.auc,
            self.positive_count,
            self.negative_count,
            self.u_statistic,
            self.tie_groups,
            self.tie_policy.as_str(),
        )
    }
}

/// Compute the AUC and report the statistics gathered along the way.
///
/// # Errors
///
/// Same as [`compute_auc`].
pub fn auc_report<L: BinaryLabel>(
    scores: &[f64],
    labels: &[L],
    config: &AucConfig,
) -> Result<AucReport> {
    let ranked = Ranked::new(scores, labels, config)?;
    let mut sweep = Sweep::new(ranked.counts);
    let mut tie_groups = 0;

    match config.tie_policy {
        TiePolicy::Batched => {
            for group in ranked.tie_groups() {
                if group.len() > 1 {
                    tie_groups += 1;
                }
                sweep.step_group(&group);
            }
        }
        TiePolicy::Sequential => {
            tie_groups = ranked.tie_groups().filter(|g| g.len() > 1).count();
            for pos in 0..ranked.pairs.len() {
                sweep.step(ranked.is_positive(pos));
            }
        }
    }
    debug_assert!(sweep.is_finished());

    let report = AucReport {
        auc: sweep.area(),
        positive_count: ranked.counts.positive,
        negative_count: ranked.counts.negative,
        tie_groups,
        tie_policy: config.tie_policy,
        u_statistic: sweep.u_statistic(),
    };
    tracing::debug!(
        len = ranked.counts.total(),
        positive = report.positive_count,
        negative = report.negative_count,
        tie_groups = report.tie_groups,
        tie_policy = report.tie_policy.as_str(),
        auc = report.auc,
        "computed ROC AUC"
    );
    Ok(report)
}
