//! Error types for the core crate.

use thiserror::Error;

/// Broad category of an [`IsingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed problem input.
    Validation,
    /// A mapping is missing an entry the operation needs.
    Lookup,
}

/// Errors produced while building, compiling or reading out Ising problems.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IsingError {
    /// A k-local term names the same variable twice.
    #[error(
        "interaction term must connect different variables: {indices:?} contains {duplicate} more than once"
    )]
    DuplicateIndex {
        /// Indices of the offending term.
        indices: Vec<usize>,
        /// The repeated variable.
        duplicate: usize,
    },

    /// A k-local term has fewer than two variables.
    #[error("interaction term must connect at least two variables, got {0:?}")]
    TermTooShort(Vec<usize>),

    /// Neither biases nor couplings were supplied.
    #[error("problem is empty: no biases and no couplings to compile")]
    EmptyProblem,

    /// Qubit count is not a multiple of four.
    #[error("{0} qubits is not one-hot encoded: the count must be a multiple of 4")]
    NotOneHot(usize),

    /// Move numbers start at 1.
    #[error("move numbers start at 1, got {0}")]
    InvalidMove(usize),

    /// Unknown direction symbol.
    #[error("unknown direction '{0}', expected one of r, l, u, d")]
    UnknownDirection(String),

    /// Solution does not cover a referenced variable.
    #[error("solution has {len} entries but variable {index} is referenced")]
    SolutionTooShort {
        /// The first variable index outside the solution.
        index: usize,
        /// Length of the supplied solution.
        len: usize,
    },

    /// Two physical qubits map onto the same logical variable.
    #[error("logical variable {logical} is mapped from both qubit {first} and qubit {second}")]
    DuplicateLogical {
        /// The logical variable.
        logical: usize,
        /// First physical qubit mapping to it.
        first: usize,
        /// Second physical qubit mapping to it.
        second: usize,
    },

    /// One physical qubit is listed twice in an inverse embedding.
    #[error("qubit {physical} is mapped to both logical variable {first} and {second}")]
    DuplicatePhysical {
        /// The repeated physical qubit.
        physical: usize,
        /// Logical variable of the first entry.
        first: usize,
        /// Logical variable of the second entry.
        second: usize,
    },

    /// A remap policy does not invert its own placement of a variable.
    #[error("qubit {physical} does not map back to a logical variable below {num_variables}")]
    InconsistentRemap {
        /// The physical qubit.
        physical: usize,
        /// Size of the logical variable range.
        num_variables: usize,
    },

    /// Inverse embedding does not cover a logical variable.
    #[error("inverse embedding has no qubit for logical variable {0}")]
    MissingLogical(usize),

    /// Solution and mapping sizes disagree.
    #[error("expected {expected} measured values, got {got}")]
    LengthMismatch {
        /// Number of entries the mapping covers.
        expected: usize,
        /// Number of entries supplied.
        got: usize,
    },
}

impl IsingError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IsingError::MissingLogical(_) | IsingError::LengthMismatch { .. } => ErrorKind::Lookup,
            _ => ErrorKind::Validation,
        }
    }
}

/// Result type for core operations.
pub type IsingResult<T> = Result<T, IsingError>;
