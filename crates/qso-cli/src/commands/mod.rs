//! CLI command implementations.

pub mod plot;
pub mod run;
