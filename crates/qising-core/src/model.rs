//! Generalized Ising problem data.
//!
//! A problem over `n` binary variables is described by a bias vector `h`
//! and a list of k-local couplings `J`:
//!
//!   E(s) = Σ_t  J_t · Π_{i ∈ t} s_i  +  Σ_i  h_i · s_i
//!
//! # Example
//!
//! ```rust
//! use qising_core::model::{Biases, Couplings, IsingProblem, KLocalTerm};
//!
//! let problem = IsingProblem::new(
//!     Biases::from(vec![-2.4, 5.2]),
//!     Couplings::from_terms(vec![KLocalTerm::new([0, 1], 2.3).unwrap()]),
//! );
//! assert_eq!(problem.num_variables(), 2);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{IsingError, IsingResult};

/// Per-variable linear biases, indexed by logical variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Biases(Vec<f64>);

impl Biases {
    /// No linear terms.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Bias of variable `index`, if one was given.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Number of biased variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no linear terms.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw bias values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Biases {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for Biases {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// An interaction between k ≥ 2 distinct variables.
///
/// Construction rejects repeated indices, so a term held by value is always
/// a valid Ising interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTerm")]
pub struct KLocalTerm {
    indices: Vec<usize>,
    coefficient: f64,
}

#[derive(Deserialize)]
struct RawTerm {
    indices: Vec<usize>,
    coefficient: f64,
}

impl TryFrom<RawTerm> for KLocalTerm {
    type Error = IsingError;

    fn try_from(raw: RawTerm) -> IsingResult<Self> {
        KLocalTerm::new(raw.indices, raw.coefficient)
    }
}

impl KLocalTerm {
    /// Create a term, validating that it joins at least two distinct variables.
    pub fn new(indices: impl IntoIterator<Item = usize>, coefficient: f64) -> IsingResult<Self> {
        let indices: Vec<usize> = indices.into_iter().collect();
        if indices.len() < 2 {
            return Err(IsingError::TermTooShort(indices));
        }
        let duplicate = indices
            .iter()
            .enumerate()
            .find(|&(pos, index)| indices[..pos].contains(index))
            .map(|(_, &index)| index);
        if let Some(duplicate) = duplicate {
            return Err(IsingError::DuplicateIndex { indices, duplicate });
        }
        Ok(Self {
            indices,
            coefficient,
        })
    }

    /// Variables joined by this term, in the order they were given.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Coupling strength.
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Number of variables joined (the k in k-local).
    pub fn locality(&self) -> usize {
        self.indices.len()
    }

    /// Highest variable index in the term.
    pub fn max_index(&self) -> usize {
        self.indices.iter().copied().max().unwrap_or(0)
    }
}

/// Ordered collection of k-local couplings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Couplings {
    terms: Vec<KLocalTerm>,
}

impl Couplings {
    /// No coupling terms.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap already-validated terms.
    pub fn from_terms(terms: Vec<KLocalTerm>) -> Self {
        Self { terms }
    }

    /// Build from raw `(indices, coefficient)` pairs, validating every term.
    ///
    /// ```rust
    /// use qising_core::model::Couplings;
    ///
    /// let j = Couplings::from_raw([(vec![0, 1], -2.0), (vec![2, 3], 3.0)]).unwrap();
    /// assert_eq!(j.len(), 2);
    /// assert!(Couplings::from_raw([(vec![1, 1], 1.0)]).is_err());
    /// ```
    pub fn from_raw<I, T>(raw: I) -> IsingResult<Self>
    where
        I: IntoIterator<Item = (T, f64)>,
        T: IntoIterator<Item = usize>,
    {
        let terms = raw
            .into_iter()
            .map(|(indices, coefficient)| KLocalTerm::new(indices, coefficient))
            .collect::<IsingResult<Vec<_>>>()?;
        Ok(Self { terms })
    }

    /// Append a term.
    pub fn push(&mut self, term: KLocalTerm) {
        self.terms.push(term);
    }

    /// All terms in insertion order.
    pub fn terms(&self) -> &[KLocalTerm] {
        &self.terms
    }

    /// Iterate over the terms.
    pub fn iter(&self) -> std::slice::Iter<'_, KLocalTerm> {
        self.terms.iter()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<KLocalTerm> for Couplings {
    fn from_iter<T: IntoIterator<Item = KLocalTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Couplings {
    type Item = &'a KLocalTerm;
    type IntoIter = std::slice::Iter<'a, KLocalTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// A generalized (k-local) Ising problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IsingProblem {
    /// Linear biases `h`.
    #[serde(default, alias = "h")]
    pub biases: Biases,
    /// k-local couplings `J`.
    #[serde(default, alias = "J")]
    pub couplings: Couplings,
}

impl IsingProblem {
    /// Create a problem from biases and couplings.
    pub fn new(biases: Biases, couplings: Couplings) -> Self {
        Self { biases, couplings }
    }

    /// True if there is nothing to optimise.
    pub fn is_empty(&self) -> bool {
        self.biases.is_empty() && self.couplings.is_empty()
    }

    /// Size of the logical variable range `0..n` covered by `h` and `J`.
    pub fn num_variables(&self) -> usize {
        let from_couplings = self
            .couplings
            .iter()
            .map(|t| t.max_index() + 1)
            .max()
            .unwrap_or(0);
        from_couplings.max(self.biases.len())
    }

    /// Logical variables that carry a bias or appear in a coupling, ascending.
    pub fn referenced_variables(&self) -> BTreeSet<usize> {
        let mut vars: BTreeSet<usize> = (0..self.biases.len()).collect();
        for term in &self.couplings {
            vars.extend(term.indices().iter().copied());
        }
        vars
    }
}
