//! Weighted Pauli products and sums.
//!
//! A [`PauliTerm`] is `c · P₀ ⊗ P₁ ⊗ … ⊗ Pₙ` with only the non-identity
//! factors stored; a [`PauliSum`] is an additive list of terms. Products of
//! terms follow the single-qubit Pauli algebra, so coefficients are complex:
//!
//!   X·Y = iZ    Y·Z = iX    Z·X = iY    P·P = I
//!
//! # Example
//!
//! ```rust
//! use qising_core::pauli::{PauliOp, PauliTerm};
//!
//! // 2.3 · Z₀Z₁
//! let zz = PauliTerm::z(0, 2.3) * PauliTerm::z(1, 1.0);
//! assert_eq!(zz.ops(), &[(0, PauliOp::Z), (1, PauliOp::Z)]);
//! assert_eq!(zz.real_coeff(), 2.3);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Mul;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl PauliOp {
    /// Operator symbol.
    pub fn name(&self) -> &'static str {
        match self {
            PauliOp::I => "I",
            PauliOp::X => "X",
            PauliOp::Y => "Y",
            PauliOp::Z => "Z",
        }
    }

    /// `self · rhs` on one qubit, as (phase, operator).
    pub fn product(self, rhs: PauliOp) -> (Complex64, PauliOp) {
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match (self, rhs) {
            (PauliOp::I, p) | (p, PauliOp::I) => (one, p),
            (a, b) if a == b => (one, PauliOp::I),
            (PauliOp::X, PauliOp::Y) => (i, PauliOp::Z),
            (PauliOp::Y, PauliOp::Z) => (i, PauliOp::X),
            (PauliOp::Z, PauliOp::X) => (i, PauliOp::Y),
            (PauliOp::Y, PauliOp::X) => (-i, PauliOp::Z),
            (PauliOp::Z, PauliOp::Y) => (-i, PauliOp::X),
            (PauliOp::X, PauliOp::Z) => (-i, PauliOp::Y),
            _ => unreachable!("all Pauli pairs are covered above"),
        }
    }
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A weighted tensor product of Pauli operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    coeff: Complex64,
    /// Non-identity factors, sorted by qubit, one per qubit.
    ops: Vec<(usize, PauliOp)>,
}

impl PauliTerm {
    /// Build a term from `(qubit, op)` factors.
    ///
    /// Factors on the same qubit are multiplied together in the order given;
    /// identities are dropped.
    pub fn new(coeff: f64, ops: impl IntoIterator<Item = (usize, PauliOp)>) -> Self {
        ops.into_iter().fold(Self::identity(coeff), |acc, (q, op)| {
            acc * Self::single(q, op, 1.0)
        })
    }

    /// Scalar multiple of the identity.
    pub fn identity(coeff: f64) -> Self {
        Self {
            coeff: Complex64::new(coeff, 0.0),
            ops: Vec::new(),
        }
    }

    fn single(qubit: usize, op: PauliOp, coeff: f64) -> Self {
        let ops = if op == PauliOp::I {
            Vec::new()
        } else {
            vec![(qubit, op)]
        };
        Self {
            coeff: Complex64::new(coeff, 0.0),
            ops,
        }
    }

    /// `coeff · Z_qubit`.
    pub fn z(qubit: usize, coeff: f64) -> Self {
        Self::single(qubit, PauliOp::Z, coeff)
    }

    /// `coeff · X_qubit`.
    pub fn x(qubit: usize, coeff: f64) -> Self {
        Self::single(qubit, PauliOp::X, coeff)
    }

    /// `coeff · Y_qubit`.
    pub fn y(qubit: usize, coeff: f64) -> Self {
        Self::single(qubit, PauliOp::Y, coeff)
    }

    /// Complex coefficient.
    pub fn coeff(&self) -> Complex64 {
        self.coeff
    }

    /// Real part of the coefficient. Terms built from Z, X or Y factors on
    /// distinct qubits with real weights are always real.
    pub fn real_coeff(&self) -> f64 {
        self.coeff.re
    }

    /// Non-identity factors sorted by qubit.
    pub fn ops(&self) -> &[(usize, PauliOp)] {
        &self.ops
    }

    /// Operator acting on `qubit` (identity if the term does not touch it).
    pub fn op_on(&self, qubit: usize) -> PauliOp {
        self.ops
            .binary_search_by_key(&qubit, |(q, _)| *q)
            .map_or(PauliOp::I, |pos| self.ops[pos].1)
    }

    /// Qubits acted on, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = usize> + '_ {
        self.ops.iter().map(|(q, _)| *q)
    }

    /// True if every factor is the identity.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of qubits acted on.
    pub fn weight(&self) -> usize {
        self.ops.len()
    }

    /// Move every factor to a new qubit.
    ///
    /// `f` must be injective over the qubits of this term.
    #[must_use]
    pub fn map_qubits(&self, mut f: impl FnMut(usize) -> usize) -> Self {
        let mut ops: Vec<(usize, PauliOp)> = self.ops.iter().map(|&(q, op)| (f(q), op)).collect();
        ops.sort_by_key(|(q, _)| *q);
        Self {
            coeff: self.coeff,
            ops,
        }
    }
}

impl Mul for PauliTerm {
    type Output = PauliTerm;

    fn mul(self, rhs: PauliTerm) -> PauliTerm {
        let mut coeff = self.coeff * rhs.coeff;
        let mut ops = Vec::with_capacity(self.ops.len() + rhs.ops.len());
        let mut left = self.ops.into_iter().peekable();
        let mut right = rhs.ops.into_iter().peekable();

        loop {
            match (left.peek().copied(), right.peek().copied()) {
                (Some((ql, pl)), Some((qr, pr))) if ql == qr => {
                    let (phase, op) = pl.product(pr);
                    coeff *= phase;
                    if op != PauliOp::I {
                        ops.push((ql, op));
                    }
                    left.next();
                    right.next();
                }
                (Some((ql, pl)), Some((qr, _))) if ql < qr => {
                    ops.push((ql, pl));
                    left.next();
                }
                (_, Some(r)) => {
                    ops.push(r);
                    right.next();
                }
                (Some(l), None) => {
                    ops.push(l);
                    left.next();
                }
                (None, None) => break,
            }
        }

        PauliTerm { coeff, ops }
    }
}

impl fmt::Display for PauliTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff.im == 0.0 {
            write!(f, "{:+.4}", self.coeff.re)?;
        } else {
            write!(f, "({:.4}{:+.4}i)", self.coeff.re, self.coeff.im)?;
        }
        if self.ops.is_empty() {
            return write!(f, " I");
        }
        for (qubit, op) in &self.ops {
            write!(f, " {op}{qubit}")?;
        }
        Ok(())
    }
}

/// An additive list of Pauli terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PauliSum {
    terms: Vec<PauliTerm>,
}

impl PauliSum {
    /// Sum of the given terms.
    pub fn from_terms(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    /// All terms.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the sum has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every qubit touched by any term, ascending.
    pub fn qubits(&self) -> BTreeSet<usize> {
        self.terms.iter().flat_map(PauliTerm::qubits).collect()
    }

    /// Move every term to new qubits. See [`PauliTerm::map_qubits`].
    #[must_use]
    pub fn map_qubits(&self, mut f: impl FnMut(usize) -> usize) -> Self {
        Self {
            terms: self.terms.iter().map(|t| t.map_qubits(&mut f)).collect(),
        }
    }
}

impl From<PauliTerm> for PauliSum {
    fn from(term: PauliTerm) -> Self {
        Self { terms: vec![term] }
    }
}

impl FromIterator<PauliTerm> for PauliSum {
    fn from_iter<T: IntoIterator<Item = PauliTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for PauliSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
