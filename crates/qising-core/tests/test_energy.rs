//! Energy evaluation tests.

use proptest::prelude::*;
use qising_core::model::{Biases, Couplings, IsingProblem, KLocalTerm};
use qising_core::{IsingError, energy_value};

#[test]
fn two_variable_reference_energy() {
    let h = Biases::from(vec![-2.4, 5.2]);
    let j = Couplings::from_raw([(vec![0, 1], 2.3)]).unwrap();
    let e = energy_value(&h, &j, &[1, -1]).unwrap();
    assert!((e - (-9.9)).abs() < 1e-12);
}

#[test]
fn duplicate_term_fails_before_evaluation() {
    let err = Couplings::from_raw([(vec![0, 1], 1.0), (vec![2, 2], 1.0)]).unwrap_err();
    assert!(matches!(err, IsingError::DuplicateIndex { duplicate: 2, .. }));
    assert!(err.to_string().contains("must connect different variables"));
}

#[test]
fn non_adjacent_duplicate_is_caught() {
    assert!(KLocalTerm::new([1, 2, 1], 1.0).is_err());
}

#[test]
fn checkerboard_energy_is_zero() {
    let j = Couplings::from_raw([
        (vec![0, 1], 1.0),
        (vec![0, 2], 1.0),
        (vec![1, 3], 1.0),
        (vec![2, 3], 1.0),
    ])
    .unwrap();
    let e = energy_value(&Biases::empty(), &j, &[-1i8, 1, -1, 1]).unwrap();
    assert_eq!(e, 0.0);
}

#[test]
fn four_local_term() {
    let problem = IsingProblem::new(
        Biases::empty(),
        Couplings::from_raw([(vec![3, 0, 2, 1], 1.5)]).unwrap(),
    );
    assert_eq!(problem.energy(&[-1i8, -1, -1, 1]).unwrap(), -1.5);
    assert_eq!(problem.energy(&[-1i8, -1, 1, 1]).unwrap(), 1.5);
}

#[test]
fn real_valued_solution() {
    let h = Biases::from(vec![2.0]);
    let e = energy_value(&h, &Couplings::empty(), &[0.25f64]).unwrap();
    assert_eq!(e, 0.5);
}

#[test]
fn deserialized_problem_is_validated() {
    let ok: IsingProblem = serde_json::from_str(
        r#"{"h": [1.0, -1.0], "J": [{"indices": [0, 1], "coefficient": 0.5}]}"#,
    )
    .unwrap();
    assert_eq!(ok.couplings.len(), 1);

    let bad = serde_json::from_str::<IsingProblem>(
        r#"{"couplings": [{"indices": [0, 0], "coefficient": 0.5}]}"#,
    );
    assert!(bad.is_err());
}

fn arb_problem() -> impl Strategy<Value = (Vec<f64>, Vec<(Vec<usize>, f64)>, Vec<i8>)> {
    (2_usize..=6).prop_flat_map(|n| {
        let term = (
            prop::sample::subsequence((0..n).collect::<Vec<_>>(), 2..=n.min(4)),
            -5.0_f64..5.0,
        );
        (
            prop::collection::vec(-5.0_f64..5.0, 0..=n),
            prop::collection::vec(term, 0..8),
            prop::collection::vec(prop_oneof![Just(1i8), Just(-1i8)], n),
        )
    })
}

proptest! {
    #[test]
    fn energy_invariant_under_term_order((h, j, sol) in arb_problem()) {
        let h = Biases::from(h);
        let forward = Couplings::from_raw(j.clone()).unwrap();
        let reversed = Couplings::from_raw(j.into_iter().rev()).unwrap();

        let a = energy_value(&h, &forward, &sol).unwrap();
        let b = energy_value(&h, &reversed, &sol).unwrap();
        prop_assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn ising_energy_bounded_by_coefficients((h, j, sol) in arb_problem()) {
        let bound: f64 = h.iter().map(|b| b.abs()).sum::<f64>()
            + j.iter().map(|(_, c)| c.abs()).sum::<f64>();
        let e = energy_value(&Biases::from(h), &Couplings::from_raw(j).unwrap(), &sol).unwrap();
        prop_assert!(e.abs() <= bound + 1e-9);
    }
}
