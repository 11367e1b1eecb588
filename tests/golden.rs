//! Golden file integration tests.
//!
//! Reads tests/testdata/bmi_scenarios.json and checks every reference form
//! against the evaluator, the CLI presenter, and the validation gate.

use bmicalc_cli::{CLIResultPresenter, OutputMode, ResultPresenter};
use bmicalc_core::{evaluate, evaluate_form, INVALID_INPUT_MESSAGE};
use bmicalc_tests::load_scenarios;

#[test]
fn golden_file_loads() {
    let golden = load_scenarios().expect("Failed to read golden file");
    assert!(!golden.description.is_empty());
    assert!(golden.scenarios.len() >= 5);
    assert!(!golden.rejected.is_empty());
}

#[test]
fn golden_evaluations() {
    let golden = load_scenarios().unwrap();
    for s in &golden.scenarios {
        let result = evaluate_form(&s.form())
            .unwrap_or_else(|e| panic!("{}: rejected: {e}", s.name));
        assert_eq!(format!("{:.2}", result.bmi), s.bmi, "{}: bmi", s.name);
        assert_eq!(result.classification, s.classification, "{}", s.name);
        assert_eq!(result.advice, s.advice, "{}", s.name);
        assert_eq!(result.color, s.classification.color(), "{}", s.name);
    }
}

#[test]
fn golden_healthy_ranges() {
    let golden = load_scenarios().unwrap();
    for s in &golden.scenarios {
        let result = evaluate_form(&s.form()).unwrap();
        let range = result.healthy_weight_range;
        assert_eq!(format!("{:.1}", range.min), s.range_min, "{}: min", s.name);
        assert_eq!(format!("{:.1}", range.max), s.range_max, "{}: max", s.name);
        assert!(
            range
                .describe()
                .contains(&format!("{} kg i {} kg", s.range_min, s.range_max)),
            "{}",
            s.name
        );
    }
}

#[test]
fn golden_quiet_output() {
    let golden = load_scenarios().unwrap();
    let presenter = CLIResultPresenter::new(OutputMode::Quiet, false);
    for s in &golden.scenarios {
        let input = s.form().validate().unwrap();
        let mut buf = Vec::new();
        presenter
            .present_result(&mut buf, &input, &evaluate(&input))
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", s.bmi));
    }
}

#[test]
fn golden_rejections() {
    let golden = load_scenarios().unwrap();
    for r in &golden.rejected {
        let err = r
            .form()
            .validate()
            .expect_err(&format!("{} should be rejected", r.name));
        assert_eq!(err.field(), r.field, "{}", r.name);
        assert_eq!(err.user_message(), INVALID_INPUT_MESSAGE);
    }
}
