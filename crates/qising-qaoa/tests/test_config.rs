//! Solve option loading tests.

use std::io::Write;

use qising_core::BiasIndexing;
use qising_qaoa::{MixerKind, QaoaError, SolveOptions};
use tempfile::NamedTempFile;

fn write_config(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn yaml_file() {
    let file = write_config(
        ".yaml",
        "steps: 3\nseed: 5\nverbose: false\nmixer:\n  kind: one_hot\n",
    );
    let opts = SolveOptions::from_file(file.path()).unwrap();

    assert_eq!(opts.steps, 3);
    assert_eq!(opts.seed, Some(5));
    assert!(!opts.verbose);
    assert_eq!(
        opts.mixer,
        MixerKind::OneHot {
            include_final_move: false
        }
    );
}

#[test]
fn json_file() {
    let file = write_config(
        ".json",
        r#"{"samples": 512, "bias_indexing": "physical", "optimizer": {"method": "COBYLA"}}"#,
    );
    let opts = SolveOptions::from_file(file.path()).unwrap();

    assert_eq!(opts.samples, Some(512));
    assert_eq!(opts.bias_indexing, BiasIndexing::Physical);
    let optimizer = opts.resolve_optimizer();
    assert_eq!(optimizer.method, "COBYLA");
    assert_eq!(optimizer.options.function_tolerance, 1.0e-2);
}

#[test]
fn evaluation_section_keeps_callback_out_of_files() {
    let file = write_config(".yaml", "evaluation:\n  return_all: false\n  samples: 64\n");
    let opts = SolveOptions::from_file(file.path()).unwrap();

    let eval = opts.evaluation.as_ref().unwrap();
    assert!(!eval.return_all);
    assert_eq!(eval.samples, Some(64));
    assert!(eval.display.is_none());

    let json = serde_json::to_value(eval).unwrap();
    assert!(json.get("display").is_none());
}

#[test]
fn invalid_file_is_a_config_error() {
    let file = write_config(".yaml", "initial_betas: [0.1, 0.2]\ninitial_gammas: [0.3]\n");
    let err = SolveOptions::from_file(file.path()).unwrap_err();
    assert!(matches!(err, QaoaError::Config(_)));

    let file = write_config(".json", "{ not json");
    assert!(matches!(
        SolveOptions::from_file(file.path()),
        Err(QaoaError::Config(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SolveOptions::from_file("/nonexistent/qising.yaml").unwrap_err();
    assert!(matches!(err, QaoaError::Io(_)));
}
