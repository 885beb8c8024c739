//! `qising-qaoa` - QAOA orchestration for k-local Ising problems.
//!
//! Builds on [`qising_core`] to turn an [`IsingProblem`](qising_core::IsingProblem)
//! into a QAOA instance, hands it to an injected variational backend and
//! reads the sampled bitstring back as an Ising solution.
//!
//! The backend is a pair of traits ([`QaoaBackend`] and
//! [`VariationalSolver`]) so any optimizer/sampler stack can be plugged in.
//! [`plan`] stops before the backend and returns the request it would
//! receive.

pub mod backend;
pub mod config;
pub mod error;
pub mod solve;

pub use backend::{QaoaAngles, QaoaBackend, QaoaRequest, VariationalSolver};
pub use config::{
    DisplayCallback, EvaluationConfig, MixerKind, OptimizerConfig, OptimizerOptions, SolveOptions,
    progress_logger,
};
pub use error::{QaoaError, QaoaResult};
pub use solve::{IsingSolution, QaoaPlan, plan, solve_klocal_ising};
