//! Adaptive trust-region optimization.
//!
//! A derivative-free trust-region method suited to noisy, stochastic cost
//! estimates.  Each iteration draws a simultaneous-perturbation direction
//! confined to the current radius, compares the two probe points against
//! the incumbent, and applies a ratio test: the quality of the realized
//! decrease relative to the probe-predicted decrease decides whether the
//! step is accepted and whether the radius grows or shrinks.  When an
//! iteration fails to improve within shot noise, the per-Hamiltonian shot
//! budget is doubled (up to a cap) so later iterations see a sharper
//! signal.

use rand::Rng;
use tracing::{debug, info};

use qso_core::{Hamiltonian, PrngKey, QsoProblem};

use crate::error::OptimResult;
use crate::logger::{IterationRecord, PrettyPrint};

/// Result of a completed optimization run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Best cost estimate observed.
    pub best_cost: f64,
    /// Parameters at the best observation.
    pub best_params: Vec<f64>,
    /// Number of iterations executed.
    pub iterations: usize,
}

/// Adaptive trust-region optimizer.
pub struct AdaptiveTrustRegion {
    param_count: usize,
    key: PrngKey,

    max_iterations: usize,
    initial_radius: f64,
    min_radius: f64,
    samples_per_iteration: usize,
    shots_per_hamiltonian: u32,
    max_shots_per_hamiltonian: u32,
    initial_params: Option<Vec<f64>>,
}

impl AdaptiveTrustRegion {
    /// Create an optimizer over `param_count` parameters.
    pub fn new(param_count: usize, key: PrngKey) -> Self {
        Self {
            param_count,
            key,
            max_iterations: 100,
            initial_radius: 0.5,
            min_radius: 1e-4,
            samples_per_iteration: 8,
            shots_per_hamiltonian: 128,
            max_shots_per_hamiltonian: 8192,
            initial_params: None,
        }
    }

    /// Set the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Set the starting trust radius.
    #[must_use]
    pub fn with_initial_radius(mut self, r: f64) -> Self {
        self.initial_radius = r;
        self
    }

    /// Set the radius below which the run terminates.
    #[must_use]
    pub fn with_min_radius(mut self, r: f64) -> Self {
        self.min_radius = r;
        self
    }

    /// Set how many Hamiltonians are sampled per cost estimate.
    #[must_use]
    pub fn with_samples_per_iteration(mut self, n: usize) -> Self {
        self.samples_per_iteration = n;
        self
    }

    /// Set the starting per-Hamiltonian shot budget.
    #[must_use]
    pub fn with_shots_per_hamiltonian(mut self, shots: u32) -> Self {
        self.shots_per_hamiltonian = shots;
        self
    }

    /// Set the shot-budget cap reached by escalation.
    #[must_use]
    pub fn with_max_shots_per_hamiltonian(mut self, shots: u32) -> Self {
        self.max_shots_per_hamiltonian = shots;
        self
    }

    /// Start from explicit parameters instead of a random initialization.
    #[must_use]
    pub fn with_initial_params(mut self, params: Vec<f64>) -> Self {
        self.initial_params = Some(params);
        self
    }

    /// Run the optimize-and-log loop to completion.
    ///
    /// `cost` estimates the expectation value of one sampled Hamiltonian at
    /// the given parameters with the given shot budget.
    pub fn run<P, C>(
        mut self,
        problem: &mut P,
        cost: &mut C,
        logger: &mut PrettyPrint,
    ) -> OptimResult<RunSummary>
    where
        P: QsoProblem,
        C: FnMut(&[f64], &Hamiltonian, u32) -> OptimResult<f64>,
    {
        let (key, init_key) = self.key.split();
        self.key = key;

        let mut params = match self.initial_params.take() {
            Some(p) => p,
            None => {
                let mut rng = init_key.rng();
                (0..self.param_count)
                    .map(|_| rng.gen_range(-0.5..0.5))
                    .collect()
            }
        };

        let mut radius = self.initial_radius;
        let mut shots = self.shots_per_hamiltonian;
        let mut best_cost = f64::INFINITY;
        let mut best_params = params.clone();
        let mut iterations = 0;

        info!(
            param_count = self.param_count,
            max_iterations = self.max_iterations,
            initial_radius = radius,
            "starting trust-region optimization"
        );

        for iteration in 0..self.max_iterations {
            let (next_key, delta_key) = self.key.split();
            self.key = next_key;

            let current = self.estimate(problem, cost, &params, shots)?;

            // Probe along a random ±1 direction scaled to the radius.
            let mut rng = delta_key.rng();
            let delta: Vec<f64> = (0..self.param_count)
                .map(|_| if rng.gen::<bool>() { radius } else { -radius })
                .collect();

            let plus: Vec<f64> = params.iter().zip(&delta).map(|(p, d)| p + d).collect();
            let minus: Vec<f64> = params.iter().zip(&delta).map(|(p, d)| p - d).collect();
            let cost_plus = self.estimate(problem, cost, &plus, shots)?;
            let cost_minus = self.estimate(problem, cost, &minus, shots)?;

            let (candidate, candidate_cost) = if cost_plus <= cost_minus {
                (plus, cost_plus)
            } else {
                (minus, cost_minus)
            };

            let predicted = (cost_plus - cost_minus).abs() / 2.0;
            let actual = current - candidate_cost;
            let rho = if predicted > f64::EPSILON {
                actual / predicted
            } else {
                0.0
            };

            debug!(iteration, current, candidate_cost, rho, radius, shots, "trust-region step");

            let accepted = actual > 0.0;
            if accepted {
                params = candidate;
                if rho > 0.75 {
                    radius *= 2.0;
                } else if rho < 0.25 {
                    radius *= 0.5;
                }
            } else {
                radius *= 0.5;
                // No improvement resolved at this budget; sharpen the signal.
                shots = (shots.saturating_mul(2)).min(self.max_shots_per_hamiltonian);
            }

            let iteration_cost = if accepted { candidate_cost } else { current };
            if iteration_cost < best_cost {
                best_cost = iteration_cost;
                best_params = params.clone();
            }

            logger.log_iteration(IterationRecord {
                cost: iteration_cost,
                params: params.clone(),
                // Incumbent plus two probes, each over the sample batch.
                samples: (3 * self.samples_per_iteration) as u64,
                shots_per_hamiltonians: u64::from(shots),
            });

            iterations = iteration + 1;
            if radius < self.min_radius {
                info!(iteration, radius, "trust radius collapsed; stopping");
                break;
            }
        }

        logger.finish()?;
        info!(best_cost, iterations, "optimization finished");

        Ok(RunSummary {
            best_cost,
            best_params,
            iterations,
        })
    }

    /// Mean cost over a fresh batch of sampled Hamiltonians.
    fn estimate<P, C>(
        &mut self,
        problem: &mut P,
        cost: &mut C,
        params: &[f64],
        shots: u32,
    ) -> OptimResult<f64>
    where
        P: QsoProblem,
        C: FnMut(&[f64], &Hamiltonian, u32) -> OptimResult<f64>,
    {
        let mut total = 0.0;
        for _ in 0..self.samples_per_iteration {
            let hamiltonian = problem.sample_hamiltonian()?;
            total += cost(params, &hamiltonian, shots)?;
        }
        Ok(total / self.samples_per_iteration as f64)
    }
}
