use std::io::Write;

use qso_runs::{ExperimentRun, RunsError};

fn write_log(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

const BASIC_LOG: &str = r#"{
    "run_number": 4,
    "log_file": "runs/run_4.json",
    "note": "baseline",
    "iterations": [
        { "cost": -0.2, "params": [0.1, 0.2], "samples": 3, "shots_per_hamiltonians": 100 },
        { "cost": -0.5, "params": [0.2, 0.1], "samples": 3, "shots_per_hamiltonians": 100 },
        { "cost": -0.6, "params": [0.3, 0.0], "samples": 3, "shots_per_hamiltonians": 200 }
    ]
}"#;

#[test]
fn loads_typed_fields_and_extras() {
    let file = write_log(BASIC_LOG);
    let run = ExperimentRun::from_path(file.path()).unwrap();

    assert_eq!(run.run_number, 4);
    assert_eq!(run.log_file, "runs/run_4.json");
    assert_eq!(run.iterations.len(), 3);
    assert_eq!(run.extra["note"], "baseline");
    assert!(!run.extra.contains_key("iterations"));
}

#[test]
fn iterations_axis_counts_from_zero() {
    let file = write_log(BASIC_LOG);
    let run = ExperimentRun::from_path(file.path()).unwrap();

    let axis = run.x_axis("iterations").unwrap();
    assert_eq!(axis.to_vec(), vec![0.0, 1.0, 2.0]);
}

#[test]
fn shots_axis_accumulates_to_total() {
    let file = write_log(BASIC_LOG);
    let run = ExperimentRun::from_path(file.path()).unwrap();

    let axis = run.x_axis("shots").unwrap();
    assert_eq!(axis.to_vec(), vec![300.0, 600.0, 1200.0]);
    assert!(axis.windows(2).into_iter().all(|w| w[0] <= w[1]));
}

#[test]
fn unknown_axis_names_the_offending_value() {
    let file = write_log(BASIC_LOG);
    let run = ExperimentRun::from_path(file.path()).unwrap();

    match run.x_axis("wallclock") {
        Err(RunsError::InvalidAxis(value)) => assert_eq!(value, "wallclock"),
        other => panic!("expected InvalidAxis, got {other:?}"),
    }
}

#[test]
fn costs_and_params_views() {
    let file = write_log(BASIC_LOG);
    let run = ExperimentRun::from_path(file.path()).unwrap();

    assert_eq!(run.costs().to_vec(), vec![-0.2, -0.5, -0.6]);

    let params = run.params().unwrap();
    assert_eq!(params.shape(), &[3, 2]);
    assert_eq!(params[[1, 0]], 0.2);
}

#[test]
fn stringified_params_are_decoded() {
    let file = write_log(
        r#"{
            "run_number": 0,
            "log_file": "r.json",
            "iterations": [
                { "cost": 1.0, "params": "[1.0, 2.0]", "samples": 1, "shots_per_hamiltonians": 1 }
            ]
        }"#,
    );
    let run = ExperimentRun::from_path(file.path()).unwrap();
    assert_eq!(run.iterations[0].params, vec![1.0, 2.0]);
}

#[test]
fn non_literal_params_string_fails() {
    let file = write_log(
        r#"{
            "run_number": 0,
            "log_file": "r.json",
            "iterations": [
                { "cost": 1.0, "params": "abc", "samples": 1, "shots_per_hamiltonians": 1 }
            ]
        }"#,
    );
    assert!(matches!(
        ExperimentRun::from_path(file.path()),
        Err(RunsError::LiteralDecode(_))
    ));
}

#[test]
fn ragged_params_fail_hard() {
    let file = write_log(
        r#"{
            "run_number": 0,
            "log_file": "r.json",
            "iterations": [
                { "cost": 1.0, "params": [1.0, 2.0], "samples": 1, "shots_per_hamiltonians": 1 },
                { "cost": 0.5, "params": [1.0], "samples": 1, "shots_per_hamiltonians": 1 }
            ]
        }"#,
    );
    let run = ExperimentRun::from_path(file.path()).unwrap();
    match run.params() {
        Err(RunsError::RaggedParams {
            expected,
            found,
            iteration,
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
            assert_eq!(iteration, 1);
        }
        other => panic!("expected RaggedParams, got {other:?}"),
    }
}

#[test]
fn empty_run_yields_empty_views() {
    let file = write_log(
        r#"{ "run_number": 0, "log_file": "r.json", "iterations": [] }"#,
    );
    let run = ExperimentRun::from_path(file.path()).unwrap();
    assert!(run.x_axis("iterations").unwrap().is_empty());
    assert!(run.costs().is_empty());
    assert_eq!(run.params().unwrap().shape(), &[0, 0]);
}

#[test]
fn reads_back_a_log_written_by_the_optimizer() {
    use qso_core::{CoreResult, Hamiltonian, HamiltonianTerm, PrngKey, QsoProblem};
    use qso_optim::{AdaptiveTrustRegion, PrettyPrint};

    struct OneTerm;
    impl QsoProblem for OneTerm {
        fn n_var(&self) -> usize {
            1
        }
        fn sample_hamiltonian(&mut self) -> CoreResult<Hamiltonian> {
            Ok(Hamiltonian::from_terms([HamiltonianTerm::z(0, 1.0)]))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run_9.json");

    let mut problem = OneTerm;
    let mut logger = PrettyPrint::new(9).with_output(&path);
    let mut cost =
        |params: &[f64], _h: &Hamiltonian, _shots: u32| Ok(params.iter().map(|p| p * p).sum());

    let summary = AdaptiveTrustRegion::new(2, PrngKey::new(1))
        .with_initial_params(vec![0.5, -0.5])
        .with_max_iterations(4)
        .with_samples_per_iteration(1)
        .run(&mut problem, &mut cost, &mut logger)
        .unwrap();

    let run = ExperimentRun::from_path(&path).unwrap();
    assert_eq!(run.run_number, 9);
    assert_eq!(run.iterations.len(), summary.iterations);
    assert_eq!(run.params().unwrap().shape(), &[summary.iterations, 2]);

    let shots = run.x_axis("shots").unwrap();
    assert!(shots.iter().all(|&s| s > 0.0));
}
