//! Error types for QAOA orchestration.

use qising_core::{ErrorKind, IsingError};
use thiserror::Error;

/// Result type for QAOA operations.
pub type QaoaResult<T> = Result<T, QaoaError>;

/// Errors that can occur while planning or running a QAOA solve.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QaoaError {
    /// Problem compilation or read-out failed.
    #[error(transparent)]
    Ising(#[from] IsingError),

    /// Supplied initial angles do not match the step count.
    #[error("initial {name} has {got} entries but the circuit has {expected} steps")]
    AngleLength {
        /// `"betas"` or `"gammas"`.
        name: &'static str,
        /// Step count.
        expected: usize,
        /// Number of supplied angles.
        got: usize,
    },

    /// The mixer acts on a qubit the compiled problem does not use.
    #[error("mixer acts on qubit {qubit}, which is outside the problem's qubit list")]
    MixerOutsideFootprint {
        /// First offending physical qubit.
        qubit: usize,
    },

    /// The variational backend reported a failure.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Configuration could not be read or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QaoaError {
    /// Convenience constructor for backend implementations.
    pub fn backend(message: impl Into<String>) -> Self {
        QaoaError::Backend(message.into())
    }

    /// Input-error category, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            QaoaError::Ising(e) => Some(e.kind()),
            QaoaError::AngleLength { .. }
            | QaoaError::MixerOutsideFootprint { .. }
            | QaoaError::Config(_) => Some(ErrorKind::Validation),
            QaoaError::Backend(_) | QaoaError::Io(_) => None,
        }
    }
}
