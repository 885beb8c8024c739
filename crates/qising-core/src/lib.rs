//! `qising-core` - k-local Ising problems compiled for QAOA.
//!
//! Translates a generalized Ising cost function
//!
//!   E(s) = Σ_t J_t · Π_{i ∈ t} s_i + Σ_i h_i · s_i
//!
//! into the weighted Pauli operators a variational QAOA loop consumes:
//!
//! - **Cost operators**: one Z-product per k-local term plus one Z per biased
//!   qubit ([`compiler`])
//! - **Driver operators**: the transverse field −Σ X ([`compiler`])
//! - **One-hot XY mixer**: a feasible-subspace-preserving alternative driver
//!   for four-way one-hot encodings ([`mixer`])
//!
//! together with the classical utilities around them: energy evaluation
//! ([`energy`]), logical/physical qubit remapping ([`remap`]) and solution
//! read-out ([`postprocess`]).
//!
//! # Quick start
//!
//! ```rust
//! use qising_core::{Biases, Couplings, HamiltonianCompiler, IsingProblem};
//!
//! let problem = IsingProblem::new(
//!     Biases::from(vec![1.0, 1.0, -1.0, 1.0]),
//!     Couplings::from_raw([(vec![0, 1], -2.0), (vec![2, 3], 3.0)]).unwrap(),
//! );
//!
//! // Variable 3 is shifted past the reserved physical qubit 3.
//! let compiled = HamiltonianCompiler::default().compile(&problem).unwrap();
//! assert_eq!(compiled.qubits(), &[0, 1, 2, 4]);
//! assert_eq!(compiled.cost().len(), 6);
//! assert_eq!(compiled.driver().len(), 4);
//!
//! let spins = compiled.readout(&[1, 1, 0, 1]).unwrap();
//! assert_eq!(spins, vec![-1, -1, 1, -1]);
//! assert_eq!(problem.energy(&spins).unwrap(), -9.0);
//! ```

pub mod compiler;
pub mod energy;
pub mod error;
pub mod mixer;
pub mod model;
pub mod pauli;
pub mod postprocess;
pub mod remap;

pub use compiler::{BiasIndexing, CompiledHamiltonian, HamiltonianCompiler};
pub use energy::energy_value;
pub use error::{ErrorKind, IsingError, IsingResult};
pub use mixer::{Direction, OneHotMixer, indicator_qubit_index};
pub use model::{Biases, Couplings, IsingProblem, KLocalTerm};
pub use pauli::{PauliOp, PauliSum, PauliTerm};
pub use postprocess::{InverseEmbedding, ising_solution, ising_trans, unembed_solution};
pub use remap::{IdentityRemap, QubitRemap, ReservedQubitShift};
