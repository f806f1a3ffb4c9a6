//! Iteration records and the pretty-printing run logger.
//!
//! The persisted format is the run-log contract: a top-level JSON object
//! with `run_number`, `log_file`, a timestamp, and an `iterations` array
//! whose entries carry at least `cost`, `params`, `samples` and
//! `shots_per_hamiltonians`.

use chrono::{DateTime, Utc};
use console::style;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::OptimResult;

/// One optimizer iteration as persisted in a run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Estimated cost at the iteration's accepted parameters.
    pub cost: f64,
    /// The parameter vector at this iteration.
    pub params: Vec<f64>,
    /// Number of Hamiltonians sampled during the iteration.
    pub samples: u64,
    /// Shots spent per sampled Hamiltonian.
    pub shots_per_hamiltonians: u64,
}

/// A complete persisted run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunLog {
    /// Ordinal of the run within an experiment series.
    pub run_number: u64,
    /// Path the log was written to.
    pub log_file: String,
    /// When the run started.
    pub timestamp: DateTime<Utc>,
    /// Per-iteration history.
    pub iterations: Vec<IterationRecord>,
}

/// Console logger that accumulates iteration records and persists them.
pub struct PrettyPrint {
    run_number: u64,
    output: Option<PathBuf>,
    started: DateTime<Utc>,
    iterations: Vec<IterationRecord>,
}

impl PrettyPrint {
    /// Create a logger for the given run number.
    pub fn new(run_number: u64) -> Self {
        Self {
            run_number,
            output: None,
            started: Utc::now(),
            iterations: Vec::new(),
        }
    }

    /// Persist the run log to `path` on [`finish`](Self::finish).
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Records accumulated so far.
    pub fn iterations(&self) -> &[IterationRecord] {
        &self.iterations
    }

    /// Record one iteration and print a status line.
    pub fn log_iteration(&mut self, record: IterationRecord) {
        let index = self.iterations.len();
        println!(
            "{} {:>4}  cost {}  samples {:>4}  shots/H {:>6}",
            style("iter").dim(),
            index,
            style(format!("{:>12.6}", record.cost)).cyan(),
            record.samples,
            record.shots_per_hamiltonians,
        );
        info!(
            iteration = index,
            cost = record.cost,
            samples = record.samples,
            shots_per_hamiltonians = record.shots_per_hamiltonians,
            "iteration complete"
        );
        self.iterations.push(record);
    }

    /// Write the accumulated run log, if an output path was configured.
    pub fn finish(&self) -> OptimResult<()> {
        let Some(path) = &self.output else {
            return Ok(());
        };
        let log = RunLog {
            run_number: self.run_number,
            log_file: path.display().to_string(),
            timestamp: self.started,
            iterations: self.iterations.clone(),
        };
        write_run_log(path, &log)?;
        info!(path = %path.display(), "run log written");
        Ok(())
    }
}

fn write_run_log(path: &Path, log: &RunLog) -> OptimResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(log)?)?;
    Ok(())
}
