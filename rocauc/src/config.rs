//! Calculator configuration.

/// How items that share an identical score are swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TiePolicy {
    /// A run of equal scores is a single threshold step: its positive and
    /// negative removals are applied together and the run contributes one
    /// trapezoid. Tied positive/negative pairs count as half a win, which
    /// makes the result equal to the normalized Mann-Whitney U.
    #[default]
    Batched,
    /// Items are removed one at a time in ascending score order, ties in
    /// original index order. Identical to [`TiePolicy::Batched`] when all
    /// scores are distinct; with ties the result is biased by how the tied
    /// labels happen to interleave.
    Sequential,
}

impl TiePolicy {
    /// Lowercase name used in summaries and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TiePolicy::Batched => "batched",
            TiePolicy::Sequential => "sequential",
        }
    }
}

/// Configuration for [`compute_auc_with`](crate::auc::compute_auc_with) and
/// [`auc_report`](crate::auc::auc_report).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AucConfig {
    /// Tie handling during the sweep.
    pub tie_policy: TiePolicy,
    /// Minimum input length at which the sort runs on the rayon pool.
    /// Ignored unless the `parallel` feature is enabled.
    pub parallel_sort_threshold: usize,
}

impl Default for AucConfig {
    fn default() -> Self {
        Self {
            tie_policy: TiePolicy::Batched,
            parallel_sort_threshold: 1 << 16,
        }
    }
}

impl AucConfig {
    /// Default configuration with per-item tie handling.
    pub fn sequential() -> Self {
        Self {
            tie_policy: TiePolicy::Sequential,
            ..Self::default()
        }
    }

    /// Replace the tie policy.
    pub fn with_tie_policy(mut self, tie_policy: TiePolicy) -> Self {
        self.tie_policy = tie_policy;
        self
    }
}
