//! Interfaces to the variational QAOA backend.
//!
//! The orchestration layer never runs circuits or optimizers itself. It
//! prepares a [`QaoaRequest`] and hands it to a [`QaoaBackend`], which
//! returns a [`VariationalSolver`] that owns the optimization loop, the
//! sampler and the program builder.

use serde::{Deserialize, Serialize};

use qising_core::PauliSum;

use crate::config::{EvaluationConfig, OptimizerConfig};
use crate::error::QaoaResult;

/// QAOA angles, one β and one γ per step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaoaAngles {
    /// Mixer angles.
    pub betas: Vec<f64>,
    /// Cost angles.
    pub gammas: Vec<f64>,
}

impl QaoaAngles {
    /// Create a new angle set.
    pub fn new(betas: Vec<f64>, gammas: Vec<f64>) -> Self {
        Self { betas, gammas }
    }

    /// Number of steps, or `None` when the two vectors disagree.
    pub fn steps(&self) -> Option<usize> {
        (self.betas.len() == self.gammas.len()).then_some(self.betas.len())
    }

    /// Flat parameter vector `[betas..., gammas...]`.
    pub fn to_params(&self) -> Vec<f64> {
        self.betas.iter().chain(&self.gammas).copied().collect()
    }

    /// Split a flat `[betas..., gammas...]` vector in half.
    pub fn from_params(params: &[f64]) -> Self {
        let (betas, gammas) = params.split_at(params.len() / 2);
        Self::new(betas.to_vec(), gammas.to_vec())
    }
}

/// Everything a backend needs to set up one QAOA instance.
#[derive(Debug, Clone, Serialize)]
pub struct QaoaRequest {
    /// Number of physical qubits in use.
    pub num_qubits: usize,
    /// Physical qubit list, strictly increasing.
    pub qubits: Vec<usize>,
    /// Number of QAOA steps.
    pub steps: usize,
    /// Cost operators.
    pub cost: Vec<PauliSum>,
    /// Driver or mixer operators.
    pub driver: Vec<PauliSum>,
    /// Seed for the backend's own randomness.
    pub seed: Option<u64>,
    /// Starting point for the optimizer.
    pub initial_angles: QaoaAngles,
    /// Classical optimizer settings.
    pub optimizer: OptimizerConfig,
    /// Expectation evaluation settings.
    pub evaluation: EvaluationConfig,
}

/// A prepared QAOA instance.
pub trait VariationalSolver {
    /// Backend-defined representation of a parameterized circuit.
    type Program;

    /// Run the variational loop and return the optimal angles.
    fn optimal_angles(&mut self) -> QaoaResult<QaoaAngles>;

    /// Sample the circuit at `angles` and return the most frequent
    /// bitstring, one bit per entry of the request's qubit list.
    fn most_frequent_bitstring(&mut self, angles: &QaoaAngles) -> QaoaResult<Vec<u8>>;

    /// Build the circuit for `angles`.
    fn parameterized_program(&self, angles: &QaoaAngles) -> QaoaResult<Self::Program>;
}

/// Factory for [`VariationalSolver`]s.
pub trait QaoaBackend {
    /// Solver produced by this backend.
    type Solver: VariationalSolver;

    /// Backend name, used in logs.
    fn name(&self) -> &str;

    /// Set up a solver for `request`.
    fn prepare(&self, request: QaoaRequest) -> QaoaResult<Self::Solver>;
}

impl<B: QaoaBackend + ?Sized> QaoaBackend for &B {
    type Solver = B::Solver;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn prepare(&self, request: QaoaRequest) -> QaoaResult<Self::Solver> {
        (**self).prepare(request)
    }
}
