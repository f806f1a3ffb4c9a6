//! `qso-runs` — reading persisted experiment runs back for analysis.
//!
//! Loads the run-log JSON written by `qso-optim` into a typed
//! [`ExperimentRun`] and derives the plotting views (cost series, x-axis
//! choices, parameter trajectories) the `qso plot` command exports.
//! Handles both current logs, where `params` is a JSON array, and older
//! logs that stored `params` as a stringified literal expression.

pub mod error;
pub mod literal;
pub mod run;

pub use error::{RunsError, RunsResult};
pub use literal::decode_literal;
pub use run::{ExperimentRun, Iteration};
