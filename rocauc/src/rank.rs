//! Rank statistics.
//!
//! Provides [`rank`] with the usual tie strategies ([`RankMethod`]) and
//! [`mann_whitney_auc`], which computes the same AUC as the sweep from the
//! rank sum of the positive class.

use rocauc_core::{BinaryLabel, Result};

use crate::validate::validate;

/// Strategy for handling tied values when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMethod {
    /// Mean of the positions the tie group occupies.
    Average,
    /// Lowest position in the tie group.
    Min,
    /// Highest position in the tie group.
    Max,
    /// Position in sorted order; ties keep their input order.
    Ordinal,
    /// Like `Min`, but consecutive groups differ by exactly 1.
    Dense,
}

/// Assign 1-based ranks to `data` using the given [`RankMethod`].
///
/// Values are ordered by [`f64::total_cmp`]: a NaN sorts above every number
/// when its sign bit is clear and below every number when it is set, and
/// `-0.0` ranks below `0.0` in a group of its own. [`mann_whitney_auc`]
/// folds `-0.0` into `0.0` before ranking. Empty input produces empty output.
pub fn rank(data: &[f64], method: RankMethod) -> Vec<f64> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));

    let mut ranks = vec![0.0; data.len()];
    let mut start = 0;
    let mut groups = 0usize;
    while start < order.len() {
        let value = data[order[start]];
        let end = order[start..]
            .iter()
            .position(|&i| data[i].total_cmp(&value).is_ne())
            .map_or(order.len(), |offset| start + offset);
        groups += 1;

        for (offset, &i) in order[start..end].iter().enumerate() {
            ranks[i] = match method {
                RankMethod::Average => (start + 1 + end) as f64 / 2.0,
                RankMethod::Min => (start + 1) as f64,
                RankMethod::Max => end as f64,
                RankMethod::Ordinal => (start + offset + 1) as f64,
                RankMethod::Dense => groups as f64,
            };
        }
        start = end;
    }
    ranks
}

/// AUC from the Mann-Whitney U statistic.
///
/// `U = R₊ − P(P+1)/2`, where `R₊` is the sum of the average ranks of the
/// positive items, and `AUC = U / (P · N)`.
///
/// # Errors
///
/// Same contract as [`compute_auc`](crate::auc::compute_auc).
pub fn mann_whitney_auc<L: BinaryLabel>(scores: &[f64], labels: &[L]) -> Result<f64> {
    let validated = validate(scores, labels)?;
    // Fold -0.0 into 0.0 so it ties with 0.0, matching the sweep.
    let folded: Vec<f64> = scores.iter().map(|&s| s + 0.0).collect();
    let ranks = rank(&folded, RankMethod::Average);

    let rank_sum: f64 = ranks
        .iter()
        .zip(&validated.labels)
        .filter(|(_, positive)| **positive)
        .map(|(r, _)| r)
        .sum();

    let p = validated.counts.positive as f64;
    let n = validated.counts.negative as f64;
    let u = rank_sum - p * (p + 1.0) / 2.0;
    Ok((u / (p * n)).clamp(0.0, 1.0))
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 5] = [0.7, 0.2, 0.7, 0.9, 0.7];

    #[test]
    fn average_ranks() {
        // sorted: 0.2(1) 0.7(2,3,4) 0.9(5)
        assert_eq!(
            rank(&DATA, RankMethod::Average),
            vec![3.0, 1.0, 3.0, 5.0, 3.0]
        );
    }

    #[test]
    fn min_and_max_ranks() {
        assert_eq!(rank(&DATA, RankMethod::Min), vec![2.0, 1.0, 2.0, 5.0, 2.0]);
        assert_eq!(rank(&DATA, RankMethod::Max), vec![4.0, 1.0, 4.0, 5.0, 4.0]);
    }

    #[test]
    fn ordinal_keeps_input_order_for_ties() {
        assert_eq!(
            rank(&DATA, RankMethod::Ordinal),
            vec![2.0, 1.0, 3.0, 5.0, 4.0]
        );
    }

    #[test]
    fn dense_ranks() {
        assert_eq!(rank(&DATA, RankMethod::Dense), vec![2.0, 1.0, 2.0, 3.0, 2.0]);
    }

    #[test]
    fn empty_input() {
        assert!(rank(&[], RankMethod::Average).is_empty());
    }

    #[test]
    fn signed_zero_and_nan_follow_total_order() {
        assert_eq!(rank(&[0.0, -0.0], RankMethod::Min), vec![2.0, 1.0]);
        assert_eq!(
            rank(&[1.0, f64::NAN, -f64::NAN], RankMethod::Ordinal),
            vec![2.0, 3.0, 1.0]
        );
    }

    #[test]
    fn mann_whitney_ties_signed_zeros() {
        let auc = mann_whitney_auc(&[0.0, -0.0], &[0, 1]).unwrap();
        assert_eq!(auc, 0.5);
    }

    #[test]
    fn mann_whitney_known_fixture() {
        let scores = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
        let labels = [0, 0, 1, 0, 0, 1, 0, 1, 1, 1];
        let auc = mann_whitney_auc(&scores, &labels).unwrap();
        assert!((auc - 0.84).abs() < 1e-12);
    }

    #[test]
    fn mann_whitney_ties_count_half() {
        let scores = [0.5, 0.5, 0.5, 0.5];
        let labels = [true, false, false, true];
        assert!((mann_whitney_auc(&scores, &labels).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mann_whitney_shares_error_contract() {
        assert!(mann_whitney_auc(&[0.1, 0.2], &[0]).unwrap_err().is_invalid_input());
        assert!(mann_whitney_auc(&[0.1, 0.2], &[1, 1]).unwrap_err().is_degenerate());
    }
}
