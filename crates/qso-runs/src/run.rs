//! Run-log loading and derived plotting views.

use ndarray::{Array1, Array2};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{RunsError, RunsResult};
use crate::literal::decode_literal;

/// One optimizer iteration as loaded from a run log.
#[derive(Debug, Clone)]
pub struct Iteration {
    /// Cost estimate at this iteration.
    pub cost: f64,
    /// Decoded parameter vector.
    pub params: Vec<f64>,
    /// Hamiltonians sampled during the iteration.
    pub samples: u64,
    /// Shots spent per sampled Hamiltonian.
    pub shots_per_hamiltonians: u64,
}

/// A loaded experiment run.
///
/// Known top-level fields are typed; everything else the writer put at
/// the top level is retained verbatim in [`extra`](Self::extra).
#[derive(Debug, Clone)]
pub struct ExperimentRun {
    /// Ordinal of the run within an experiment series.
    pub run_number: u64,
    /// Path the log was written to, as recorded by the writer.
    pub log_file: String,
    /// Per-iteration history, in file order.
    pub iterations: Vec<Iteration>,
    /// Remaining top-level fields, untouched.
    pub extra: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawRun {
    run_number: u64,
    log_file: String,
    iterations: Vec<RawIteration>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Deserialize)]
struct RawIteration {
    cost: f64,
    params: RawParams,
    samples: u64,
    shots_per_hamiltonians: u64,
}

/// `params` is either a JSON number array or a stringified literal
/// expression, depending on the writer's vintage.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawParams {
    Values(Vec<f64>),
    Text(String),
}

impl ExperimentRun {
    /// Load a run log from disk.
    pub fn from_path(path: impl AsRef<Path>) -> RunsResult<Self> {
        let path = path.as_ref();
        let raw: RawRun = serde_json::from_str(&fs::read_to_string(path)?)?;

        let mut iterations = Vec::with_capacity(raw.iterations.len());
        for raw_iteration in raw.iterations {
            let params = match raw_iteration.params {
                RawParams::Values(values) => values,
                RawParams::Text(text) => decode_literal(&text)?,
            };
            iterations.push(Iteration {
                cost: raw_iteration.cost,
                params,
                samples: raw_iteration.samples,
                shots_per_hamiltonians: raw_iteration.shots_per_hamiltonians,
            });
        }

        debug!(
            path = %path.display(),
            run_number = raw.run_number,
            iterations = iterations.len(),
            "loaded run log"
        );

        Ok(Self {
            run_number: raw.run_number,
            log_file: raw.log_file,
            iterations,
            extra: raw.extra,
        })
    }

    /// X-axis values for plotting against `axis`.
    ///
    /// `"iterations"` yields `0..n-1`; `"shots"` yields the running total
    /// of shots spent (`samples * shots_per_hamiltonians`, accumulated).
    pub fn x_axis(&self, axis: &str) -> RunsResult<Array1<f64>> {
        match axis {
            "iterations" => Ok(Array1::from_iter(
                (0..self.iterations.len()).map(|i| i as f64),
            )),
            "shots" => {
                let mut total = 0u64;
                Ok(self
                    .iterations
                    .iter()
                    .map(|i| {
                        total += i.samples * i.shots_per_hamiltonians;
                        total as f64
                    })
                    .collect())
            }
            other => Err(RunsError::InvalidAxis(other.to_string())),
        }
    }

    /// The cost series, in iteration order.
    pub fn costs(&self) -> Array1<f64> {
        self.iterations.iter().map(|i| i.cost).collect()
    }

    /// Parameter trajectories as an `(iterations, params)` matrix.
    ///
    /// Fails if any iteration's parameter count disagrees with the first.
    pub fn params(&self) -> RunsResult<Array2<f64>> {
        let rows = self.iterations.len();
        let cols = self.iterations.first().map_or(0, |i| i.params.len());

        let mut flat = Vec::with_capacity(rows * cols);
        for (index, iteration) in self.iterations.iter().enumerate() {
            if iteration.params.len() != cols {
                return Err(RunsError::RaggedParams {
                    expected: cols,
                    found: iteration.params.len(),
                    iteration: index,
                });
            }
            flat.extend_from_slice(&iteration.params);
        }

        // Shape is consistent by construction.
        Ok(Array2::from_shape_vec((rows, cols), flat).expect("row-major layout"))
    }
}
