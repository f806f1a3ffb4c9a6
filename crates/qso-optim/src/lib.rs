//! `qso-optim` — the classical half of the variational loop.
//!
//! Drives a [`QsoProblem`](qso_core::QsoProblem) against a cost function
//! with the [`AdaptiveTrustRegion`] optimizer: each iteration samples a
//! fresh batch of Hamiltonians from the problem, estimates the cost with a
//! finite shot budget, and takes a radius-bounded step whose accept/reject
//! ratio test adapts both the radius and the shot budget.  Every iteration
//! is recorded by the [`PrettyPrint`] logger, which persists the run-log
//! JSON that `qso-runs` reads back.

pub mod error;
pub mod logger;
pub mod trust_region;

pub use error::{OptimError, OptimResult};
pub use logger::{IterationRecord, PrettyPrint, RunLog};
pub use trust_region::{AdaptiveTrustRegion, RunSummary};
