//! One-hot XY mixer tests.

use std::collections::BTreeSet;

use qising_core::mixer::{Direction, OneHotMixer, XY_WEIGHT, indicator_qubit_index};
use qising_core::{ErrorKind, IsingError, PauliOp};

#[test]
fn rejects_non_one_hot_counts() {
    for n in [1, 2, 3, 5, 7, 10] {
        let err = OneHotMixer::new().generate(n).unwrap_err();
        assert_eq!(err, IsingError::NotOneHot(n));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

#[test]
fn two_moves_mix_only_the_first() {
    let ops = OneHotMixer::new().generate(8).unwrap();
    assert_eq!(ops.len(), 12);
    let touched: BTreeSet<usize> = ops.iter().flat_map(|s| s.qubits()).collect();
    assert_eq!(touched, (0..4).collect());
}

#[test]
fn final_move_included_on_request() {
    let ops = OneHotMixer::new().with_final_move(true).generate(8).unwrap();
    assert_eq!(ops.len(), 24);
    let touched: BTreeSet<usize> = ops.iter().flat_map(|s| s.qubits()).collect();
    assert_eq!(touched, (0..8).collect());
}

#[test]
fn single_move_default_is_empty() {
    assert!(OneHotMixer::new().generate(4).unwrap().is_empty());
    assert_eq!(
        OneHotMixer::new().with_final_move(true).generate(4).unwrap().len(),
        12
    );
}

#[test]
fn terms_alternate_xx_and_yy_over_all_pairs() {
    let ops = OneHotMixer::new().generate(8).unwrap();
    let mut pairs = Vec::new();
    for chunk in ops.chunks(2) {
        let xx = &chunk[0].terms()[0];
        let yy = &chunk[1].terms()[0];
        assert_eq!(xx.real_coeff(), XY_WEIGHT);
        assert_eq!(yy.real_coeff(), XY_WEIGHT);
        assert!(xx.ops().iter().all(|(_, op)| *op == PauliOp::X));
        assert!(yy.ops().iter().all(|(_, op)| *op == PauliOp::Y));
        let qx: Vec<usize> = xx.qubits().collect();
        let qy: Vec<usize> = yy.qubits().collect();
        assert_eq!(qx, qy);
        pairs.push((qx[0], qx[1]));
    }
    assert_eq!(
        pairs,
        vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    );
}

#[test]
fn indicator_index_matches_block_layout() {
    for move_number in 1..=3 {
        for (pos, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(
                indicator_qubit_index(move_number, dir).unwrap(),
                4 * (move_number - 1) + pos
            );
        }
    }
}

#[test]
fn no_z_terms() {
    let ops = OneHotMixer::new().with_final_move(true).generate(12).unwrap();
    assert!(
        ops.iter()
            .flat_map(|s| s.terms())
            .all(|t| t.ops().iter().all(|(_, op)| *op != PauliOp::Z))
    );
}
