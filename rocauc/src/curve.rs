//! ROC curve materialised from the threshold sweep.
//!
//! Use this when the curve itself is needed (plotting, picking an operating
//! point). For the area alone, [`compute_auc`](crate::auc::compute_auc)
//! avoids allocating the points.

use rocauc_core::{BinaryLabel, Result};

use crate::config::AucConfig;
use crate::sweep::{Ranked, Sweep};

/// A single point on the ROC curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocPoint {
    /// Items scoring at least this value are classified positive.
    #[cfg_attr(feature = "serde", serde(with = "threshold_serde"))]
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN).
    pub fpr: f64,
    /// True positive rate (recall): TP / (TP + FN).
    pub tpr: f64,
}

/// The `+∞` anchor threshold is written as `null`, which JSON can represent.
#[cfg(feature = "serde")]
mod threshold_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(threshold: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        threshold
            .is_finite()
            .then_some(*threshold)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// ROC curve with AUC.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RocCurve {
    /// Points on the curve, from (0, 0) to (1, 1).
    pub points: Vec<RocPoint>,
    /// Area under the curve, equal to the batched sweep.
    pub auc: f64,
}

/// Compute the ROC curve from predicted scores and binary labels.
///
/// One point per distinct score plus the `(+∞, 0, 0)` anchor. Tied scores
/// form a single step, so the curve runs diagonally across a tie group.
///
/// # Errors
///
/// Same contract as [`compute_auc`](crate::auc::compute_auc).
pub fn roc_curve<L: BinaryLabel>(scores: &[f64], labels: &[L]) -> Result<RocCurve> {
    let ranked = Ranked::new(scores, labels, &AucConfig::default())?;
    let mut sweep = Sweep::new(ranked.counts);

    // Walking upward the rates fall from (1, 1); collect, then reverse.
    let mut points = Vec::new();
    for group in ranked.tie_groups() {
        points.push(RocPoint {
            threshold: group.score,
            fpr: sweep.fpr(),
            tpr: sweep.tpr(),
        });
        sweep.step_group(&group);
    }
    points.push(RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    });
    points.reverse();

    Ok(RocCurve {
        points,
        auc: sweep.area(),
    })
}

/// Compute only the AUC of the ROC curve.
///
/// Shorthand for `roc_curve(scores, labels)?.auc`.
pub fn roc_auc<L: BinaryLabel>(scores: &[f64], labels: &[L]) -> Result<f64> {
    Ok(roc_curve(scores, labels)?.auc)
}
