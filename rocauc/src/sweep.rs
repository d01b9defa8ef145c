//! Ascending threshold sweep over ranked scores.
//!
//! The threshold starts below every score, where all items are classified
//! positive and both rates are 1.0, and moves upward past one item (or one
//! tie group) at a time until nothing is classified positive. Passing a
//! positive lowers the TPR only and encloses no area. Passing a negative
//! lowers the FPR and adds the strip between the old and new FPR under the
//! current TPR.

use rocauc_core::{BinaryLabel, Result};

use crate::config::AucConfig;
use crate::validate::{validate, ClassCounts};

/// Validated input with `(score, original_index)` pairs in ascending score
/// order. Ties keep their original index order.
#[derive(Debug, Clone)]
pub(crate) struct Ranked {
    pub pairs: Vec<(f64, usize)>,
    pub labels: Vec<bool>,
    pub counts: ClassCounts,
}

impl Ranked {
    /// Validate and sort.
    pub fn new<L: BinaryLabel>(scores: &[f64], labels: &[L], config: &AucConfig) -> Result<Self> {
        let validated = validate(scores, labels)?;

        // `+ 0.0` folds -0.0 into 0.0 so both land in one tie group.
        let mut pairs: Vec<(f64, usize)> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (s + 0.0, i))
            .collect();
        sort_ascending(&mut pairs, config.parallel_sort_threshold);

        Ok(Self {
            pairs,
            labels: validated.labels,
            counts: validated.counts,
        })
    }

    /// Label of the item at sorted position `pos`.
    #[inline]
    pub fn is_positive(&self, pos: usize) -> bool {
        self.labels[self.pairs[pos].1]
    }

    /// Runs of equal scores in ascending order.
    pub fn tie_groups(&self) -> TieGroups<'_> {
        TieGroups {
            ranked: self,
            pos: 0,
        }
    }
}

/// Stable ascending sort on the score.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn sort_ascending(pairs: &mut [(f64, usize)], parallel_threshold: usize) {
    #[cfg(feature = "parallel")]
    {
        if pairs.len() >= parallel_threshold {
            use rayon::prelude::*;
            pairs.par_sort_by(|a, b| a.0.total_cmp(&b.0));
            return;
        }
    }

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
}

/// A maximal run of items sharing one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TieGroup {
    pub score: f64,
    pub positives: usize,
    pub negatives: usize,
}

impl TieGroup {
    pub fn len(&self) -> usize {
        self.positives + self.negatives
    }
}

/// Iterator over the [`TieGroup`]s of a [`Ranked`] input.
pub(crate) struct TieGroups<'a> {
    ranked: &'a Ranked,
    pos: usize,
}

impl Iterator for TieGroups<'_> {
    type Item = TieGroup;

    fn next(&mut self) -> Option<TieGroup> {
        let pairs = &self.ranked.pairs;
        let score = pairs.get(self.pos)?.0;

        let mut group = TieGroup {
            score,
            positives: 0,
            negatives: 0,
        };
        while self.pos < pairs.len() && pairs[self.pos].0 == score {
            if self.ranked.is_positive(self.pos) {
                group.positives += 1;
            } else {
                group.negatives += 1;
            }
            self.pos += 1;
        }
        Some(group)
    }
}

/// Running state of the sweep.
///
/// The area is accumulated exactly, in units of `1 / (2 · P · N)`, so a
/// perfectly separating score yields exactly 1.0.
#[derive(Debug, Clone)]
pub(crate) struct Sweep {
    counts: ClassCounts,
    tp_remaining: usize,
    fp_remaining: usize,
    area_units: u128,
}

impl Sweep {
    /// Threshold at −∞: every item classified positive.
    pub fn new(counts: ClassCounts) -> Self {
        Self {
            counts,
            tp_remaining: counts.positive,
            fp_remaining: counts.negative,
            area_units: 0,
        }
    }

    /// True-positive rate at the current threshold.
    pub fn tpr(&self) -> f64 {
        self.tp_remaining as f64 / self.counts.positive as f64
    }

    /// False-positive rate at the current threshold.
    pub fn fpr(&self) -> f64 {
        self.fp_remaining as f64 / self.counts.negative as f64
    }

    /// Move the threshold past a single item.
    ///
    /// A negative adds `(fpr - fpr_new) * tpr = tp_remaining / (P · N)`.
    pub fn step(&mut self, is_positive: bool) {
        if is_positive {
            self.tp_remaining -= 1;
        } else {
            self.fp_remaining -= 1;
            self.area_units += 2 * self.tp_remaining as u128;
        }
    }

    /// Move the threshold past a whole tie group at once.
    ///
    /// The group adds the trapezoid between the TPR before and after its
    /// positives are removed: `negatives / N * (tp_before + tp_after) / (2 · P)`.
    pub fn step_group(&mut self, group: &TieGroup) {
        let tp_before = self.tp_remaining;
        self.tp_remaining -= group.positives;
        self.fp_remaining -= group.negatives;
        self.area_units +=
            group.negatives as u128 * (tp_before as u128 + self.tp_remaining as u128);
    }

    /// Area accumulated so far.
    pub fn area(&self) -> f64 {
        self.area_units as f64 / (2 * self.counts.pairs()) as f64
    }

    /// Mann-Whitney U implied by the area: positive/negative pairs ordered
    /// correctly, ties counting one half.
    pub fn u_statistic(&self) -> f64 {
        self.area_units as f64 / 2.0
    }

    /// Whether the threshold has passed every item.
    pub fn is_finished(&self) -> bool {
        self.tp_remaining == 0 && self.fp_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "parallel")]
    use crate::config::TiePolicy;

    fn ranked(scores: &[f64], labels: &[u8]) -> Ranked {
        Ranked::new(scores, labels, &AucConfig::default()).unwrap()
    }

    #[test]
    fn pairs_sorted_ascending_with_stable_ties() {
        let r = ranked(&[0.5, 0.1, 0.5, 0.3], &[1, 0, 0, 1]);
        let order: Vec<usize> = r.pairs.iter().map(|&(_, i)| i).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
        assert!(!r.is_positive(0));
        assert!(r.is_positive(2));
    }

    #[test]
    fn negative_zero_joins_positive_zero() {
        let r = ranked(&[0.0, -0.0, 1.0], &[1, 0, 1]);
        let groups: Vec<TieGroup> = r.tie_groups().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[0].positives, 1);
        assert_eq!(groups[0].negatives, 1);
    }

    #[test]
    fn tie_groups_cover_every_item() {
        let r = ranked(&[0.2, 0.2, 0.2, 0.7, 0.9, 0.9], &[0, 1, 0, 1, 0, 1]);
        let groups: Vec<TieGroup> = r.tie_groups().collect();
        assert_eq!(
            groups,
            vec![
                TieGroup {
                    score: 0.2,
                    positives: 1,
                    negatives: 2
                },
                TieGroup {
                    score: 0.7,
                    positives: 1,
                    negatives: 0
                },
                TieGroup {
                    score: 0.9,
                    positives: 1,
                    negatives: 1
                },
            ]
        );
        let total: usize = groups.iter().map(TieGroup::len).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn rates_start_at_one_and_end_at_zero() {
        let r = ranked(&[0.1, 0.2, 0.3, 0.4], &[0, 1, 0, 1]);
        let mut sweep = Sweep::new(r.counts);
        assert_eq!(sweep.tpr(), 1.0);
        assert_eq!(sweep.fpr(), 1.0);

        for pos in 0..r.pairs.len() {
            sweep.step(r.is_positive(pos));
        }
        assert!(sweep.is_finished());
        assert_eq!(sweep.tpr(), 0.0);
        assert_eq!(sweep.fpr(), 0.0);
        // Pairs ordered correctly: (0.1 < 0.2), (0.1 < 0.4), (0.3 < 0.4).
        assert_eq!(sweep.u_statistic(), 3.0);
        assert_eq!(sweep.area(), 0.75);
    }

    #[test]
    fn group_step_gives_half_credit_for_ties() {
        let r = ranked(&[0.5, 0.5], &[0, 1]);
        let mut sweep = Sweep::new(r.counts);
        for group in r.tie_groups() {
            sweep.step_group(&group);
        }
        assert!(sweep.is_finished());
        assert_eq!(sweep.area(), 0.5);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_sort_keeps_ties_in_index_order() {
        // Four tie groups of 250 items with interleaved labels.
        let scores: Vec<f64> = (0..1000).map(|i| ((i * 7) % 4) as f64).collect();
        let labels: Vec<u8> = (0..1000).map(|i| ((i / 3) % 2) as u8).collect();

        let parallel = AucConfig {
            tie_policy: TiePolicy::Sequential,
            parallel_sort_threshold: 0,
        };
        let serial = AucConfig {
            parallel_sort_threshold: usize::MAX,
            ..parallel.clone()
        };

        let par = Ranked::new(&scores, &labels, &parallel).unwrap();
        let ser = Ranked::new(&scores, &labels, &serial).unwrap();
        assert_eq!(par.pairs, ser.pairs);
        assert!(par
            .pairs
            .windows(2)
            .all(|w| w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1)));

        assert_eq!(
            crate::auc::compute_auc_with(&scores, &labels, &parallel).unwrap(),
            crate::auc::compute_auc_with(&scores, &labels, &serial).unwrap()
        );
    }
}
