//! Area under the ROC curve for binary classifiers.
//!
//! - **AUC** — [`compute_auc`] sorts the scores once and integrates the ROC
//!   step function during a single ascending threshold sweep
//! - **Tie handling** — [`TiePolicy`] selects exact batched ties (default)
//!   or per-item processing in input order
//! - **Reports** — [`auc_report`] adds class counts, tie statistics and the
//!   Mann-Whitney U
//! - **Curves** — [`roc_curve`] materialises the (FPR, TPR) points
//! - **Rank statistics** — [`rank()`] and the rank-sum [`mann_whitney_auc`]
//!
//! Enable the `parallel` feature to sort large inputs on the rayon pool and
//! `serde` to serialize configs, curves and reports.

pub mod auc;
pub mod config;
pub mod curve;
pub mod rank;

mod sweep;
mod validate;

pub use auc::{auc_report, compute_auc, compute_auc_with, AucReport};
pub use config::{AucConfig, TiePolicy};
pub use curve::{roc_auc, roc_curve, RocCurve, RocPoint};
pub use rank::{mann_whitney_auc, rank, RankMethod};
pub use rocauc_core::{AucError, BinaryLabel, Result, Scored, Summarizable};
