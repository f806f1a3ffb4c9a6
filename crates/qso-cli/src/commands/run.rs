//! Run command implementation.

use anyhow::{bail, Context, Result};
use console::style;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;

use qso_circuit::Statevector;
use qso_core::{Hamiltonian, PrngKey};
use qso_optim::{AdaptiveTrustRegion, OptimResult, PrettyPrint};
use qso_problem::{
    feature_selection_ansatz, random_linearly_correlated_data, FeatureSelectionProblem,
    DEFAULT_TROTTER_STEPS,
};

/// All `qso run` settings.
pub struct RunArgs {
    pub k_real: usize,
    pub k_fake: usize,
    pub k_redundant: usize,
    pub samples: usize,
    pub betas: Vec<f64>,
    pub data_description: Option<String>,
    pub alpha: f64,
    pub gamma: f64,
    pub seed: u64,
    pub layers: usize,
    pub max_iterations: usize,
    pub shots_per_hamiltonian: u32,
    pub samples_per_iteration: usize,
    pub output: Option<String>,
    pub run_number: u64,
}

/// Execute the run command.
pub fn execute(args: RunArgs) -> Result<()> {
    let n_var = args.k_real + args.k_fake + args.k_redundant;
    if n_var == 0 {
        bail!("at least one of --k_real, --k_fake, --k_redundant must be non-zero");
    }
    println!(
        "{} Feature selection over {} variables ({} real, {} fake, {} redundant), seed {}",
        style("→").cyan().bold(),
        style(n_var).green(),
        args.k_real,
        args.k_fake,
        args.k_redundant,
        args.seed,
    );

    let mut key = PrngKey::new(args.seed);

    let (response_vector, redundant_matrix) = match &args.data_description {
        Some(description) => parse_data_description(description, args.k_real, args.k_redundant)?,
        None => {
            let (next, response_key, redundant_key) = key.split3();
            key = next;
            (
                normal_vector(args.k_real, response_key),
                normal_matrix(args.k_redundant, args.k_real, redundant_key),
            )
        }
    };

    let (_key, data_key, problem_key, optimizer_key) = key.split4();
    let (feature_data, response_data) = random_linearly_correlated_data(
        args.samples,
        args.k_real,
        args.k_fake,
        args.k_redundant,
        &args.betas,
        args.gamma,
        response_vector.view(),
        redundant_matrix.view(),
        data_key,
    )?;

    let mut problem =
        FeatureSelectionProblem::new(feature_data, response_data, args.alpha, problem_key)?;

    let (param_count, ansatz) = feature_selection_ansatz(n_var, args.layers, DEFAULT_TROTTER_STEPS);
    println!(
        "  Ansatz: {} layers, {} parameters",
        args.layers, param_count
    );

    let (optimizer_key, cost_key) = optimizer_key.split();
    let mut cost_key = cost_key;
    let mut cost = move |params: &[f64],
                         hamiltonian: &Hamiltonian,
                         shots: u32|
          -> OptimResult<f64> {
        let circuit = ansatz.circuit(params)?;
        let mut state = Statevector::new(n_var);
        state.run(&circuit)?;
        let (kept, sample_key) = cost_key.split();
        cost_key = kept;
        Ok(state.sampled_expectation(hamiltonian, shots, sample_key)?)
    };

    let mut logger = PrettyPrint::new(args.run_number);
    if let Some(path) = &args.output {
        logger = logger.with_output(path);
    }

    let summary = AdaptiveTrustRegion::new(param_count, optimizer_key)
        .with_max_iterations(args.max_iterations)
        .with_shots_per_hamiltonian(args.shots_per_hamiltonian)
        .with_samples_per_iteration(args.samples_per_iteration)
        .run(&mut problem, &mut cost, &mut logger)?;

    println!(
        "{} Best cost {} after {} iterations",
        style("✓").green().bold(),
        style(format!("{:.6}", summary.best_cost)).cyan(),
        summary.iterations,
    );
    if let Some(path) = &args.output {
        println!("  Run log: {path}");
    }

    Ok(())
}

/// Parse an explicit comma-separated data description: `k_real` response
/// entries followed by the row-major `k_redundant x k_real` matrix.
fn parse_data_description(
    description: &str,
    k_real: usize,
    k_redundant: usize,
) -> Result<(Array1<f64>, Array2<f64>)> {
    let values: Vec<f64> = description
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("invalid number in data description: {s:?}"))
        })
        .collect::<Result<_>>()?;

    let expected = k_real + k_redundant * k_real;
    if values.len() != expected {
        bail!(
            "data description needs {} values ({} response + {}x{} matrix), got {}",
            expected,
            k_real,
            k_redundant,
            k_real,
            values.len()
        );
    }

    let response_vector = Array1::from_vec(values[..k_real].to_vec());
    let redundant_matrix =
        Array2::from_shape_vec((k_redundant, k_real), values[k_real..].to_vec())?;
    Ok((response_vector, redundant_matrix))
}

fn normal_vector(len: usize, key: PrngKey) -> Array1<f64> {
    let mut rng = key.rng();
    Array1::from_iter((0..len).map(|_| rng.sample::<f64, _>(StandardNormal)))
}

fn normal_matrix(rows: usize, cols: usize, key: PrngKey) -> Array2<f64> {
    let mut rng = key.rng();
    Array2::from_shape_fn((rows, cols), |_| rng.sample::<f64, _>(StandardNormal))
}
