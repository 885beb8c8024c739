//! Ising problem → QAOA cost and driver Hamiltonians.
//!
//! For a problem `(h, J)` the compiler emits
//!
//!   C = Σ_t J_t · Π_{i ∈ t} Z_{p(i)}  +  Σ_p h_{ℓ(p)} · Z_p
//!   B = Σ_p −X_p
//!
//! where `p(·)` is the logical→physical remap and `ℓ(·)` its inverse. Every
//! term is returned as its own single-term [`PauliSum`] so the variational
//! loop can treat the Hamiltonians as additive decompositions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{IsingError, IsingResult};
use crate::model::IsingProblem;
use crate::pauli::{PauliSum, PauliTerm};
use crate::postprocess::ising_trans;
use crate::remap::{QubitRemap, ReservedQubitShift};

/// Weight of every transverse-field driver term.
pub const DRIVER_WEIGHT: f64 = -1.0;

/// How the bias of a physical qubit is looked up in `h`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasIndexing {
    /// `h[to_logical(p)]`: the bias follows its variable through the remap.
    #[default]
    Logical,
    /// `h[p]`: the physical index is used directly as a subscript while the
    /// bias term stays on qubit `p`. Only agrees with `Logical` when no
    /// variable is shifted.
    Physical,
}

impl std::str::FromStr for BiasIndexing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logical" => Ok(BiasIndexing::Logical),
            "physical" => Ok(BiasIndexing::Physical),
            other => Err(format!(
                "unknown bias indexing '{other}', expected 'logical' or 'physical'"
            )),
        }
    }
}

/// Compiles Ising problems with a fixed remap policy.
#[derive(Debug, Clone)]
pub struct HamiltonianCompiler<R = ReservedQubitShift> {
    remap: R,
    bias_indexing: BiasIndexing,
}

impl Default for HamiltonianCompiler {
    fn default() -> Self {
        Self::new(ReservedQubitShift::default())
    }
}

impl<R: QubitRemap> HamiltonianCompiler<R> {
    /// Compiler placing variables through `remap`, with logical bias lookup.
    pub fn new(remap: R) -> Self {
        Self {
            remap,
            bias_indexing: BiasIndexing::default(),
        }
    }

    /// Choose how biases are looked up.
    #[must_use]
    pub fn with_bias_indexing(mut self, bias_indexing: BiasIndexing) -> Self {
        self.bias_indexing = bias_indexing;
        self
    }

    /// The remap policy in use.
    pub fn remap(&self) -> &R {
        &self.remap
    }

    /// The bias lookup mode in use.
    pub fn bias_indexing(&self) -> BiasIndexing {
        self.bias_indexing
    }

    /// Compile `problem` into cost operators, driver operators and the
    /// sorted list of physical qubits it occupies.
    #[instrument(skip_all, fields(biases = problem.biases.len(), couplings = problem.couplings.len()))]
    pub fn compile(&self, problem: &IsingProblem) -> IsingResult<CompiledHamiltonian> {
        if problem.is_empty() {
            return Err(IsingError::EmptyProblem);
        }

        let mut qubit_set = BTreeSet::new();
        let mut cost = Vec::with_capacity(problem.couplings.len() + problem.biases.len());

        for term in &problem.couplings {
            let mut physical = term.indices().iter().map(|&i| self.remap.to_physical(i));
            // KLocalTerm guarantees at least two indices.
            let Some(first) = physical.next() else {
                continue;
            };
            qubit_set.insert(first);
            let mut product = PauliTerm::z(first, term.coefficient());
            for q in physical {
                qubit_set.insert(q);
                product = product * PauliTerm::z(q, 1.0);
            }
            cost.push(PauliSum::from(product));
        }

        qubit_set.extend((0..problem.biases.len()).map(|i| self.remap.to_physical(i)));
        let qubits: Vec<usize> = qubit_set.into_iter().collect();
        debug!(?qubits, "generated qubit list");

        let num_variables = problem.num_variables();
        let mut logical = Vec::with_capacity(qubits.len());
        for &p in &qubits {
            let var = self
                .remap
                .to_logical(p)
                .filter(|&v| v < num_variables && self.remap.to_physical(v) == p)
                .ok_or(IsingError::InconsistentRemap {
                    physical: p,
                    num_variables,
                })?;
            logical.push(var);

            let lookup = match self.bias_indexing {
                BiasIndexing::Logical => var,
                BiasIndexing::Physical => p,
            };
            if let Some(bias) = problem.biases.get(lookup) {
                debug!(qubit = p, bias_index = lookup, bias, "bias term");
                cost.push(PauliSum::from(PauliTerm::z(p, bias)));
            }
        }

        let driver = qubits
            .iter()
            .map(|&p| PauliSum::from(PauliTerm::x(p, DRIVER_WEIGHT)))
            .collect();

        debug!(
            cost_terms = cost.len(),
            qubits = qubits.len(),
            "compiled Ising Hamiltonian"
        );

        Ok(CompiledHamiltonian {
            cost,
            driver,
            qubits,
            logical,
            num_variables,
        })
    }
}

/// Output of [`HamiltonianCompiler::compile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledHamiltonian {
    cost: Vec<PauliSum>,
    driver: Vec<PauliSum>,
    qubits: Vec<usize>,
    logical: Vec<usize>,
    num_variables: usize,
}

impl CompiledHamiltonian {
    /// Cost operators: coupling products first, then one bias term per qubit.
    pub fn cost(&self) -> &[PauliSum] {
        &self.cost
    }

    /// Transverse-field driver operators, one per qubit.
    pub fn driver(&self) -> &[PauliSum] {
        &self.driver
    }

    /// Physical qubits used, strictly increasing.
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Logical variable on each entry of [`qubits`](Self::qubits).
    pub fn logical_variables(&self) -> &[usize] {
        &self.logical
    }

    /// Size of the logical variable range.
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Number of physical qubits used.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Convert a measured bitstring, ordered like [`qubits`](Self::qubits),
    /// into a logical-order Ising solution.
    ///
    /// Variables that no qubit carries read out as +1.
    pub fn readout(&self, bits: &[u8]) -> IsingResult<Vec<i8>> {
        if bits.len() != self.qubits.len() {
            return Err(IsingError::LengthMismatch {
                expected: self.qubits.len(),
                got: bits.len(),
            });
        }
        let mut spins = vec![1i8; self.num_variables];
        for ((&physical, &var), &bit) in self.qubits.iter().zip(&self.logical).zip(bits) {
            let slot = spins
                .get_mut(var)
                .ok_or(IsingError::InconsistentRemap {
                    physical,
                    num_variables: self.num_variables,
                })?;
            *slot = ising_trans(bit);
        }
        Ok(spins)
    }
}
