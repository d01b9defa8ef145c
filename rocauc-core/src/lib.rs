//! Shared primitives and traits for the rocauc workspace.
//!
//! `rocauc-core` provides the foundation the calculator crate builds on:
//!
//! - **Error types** — [`AucError`] and [`Result`] for structured error handling
//! - **Traits** — [`BinaryLabel`] for ground-truth labels, [`Scored`] and
//!   [`Summarizable`] for reports

pub mod error;
pub mod traits;

pub use error::{AucError, Result};
pub use traits::*;
