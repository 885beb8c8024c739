//! Measurement post-processing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IsingError, IsingResult};

/// Binary measurement → Ising spin: 0 ↦ +1, anything else ↦ −1.
pub fn ising_trans(bit: u8) -> i8 {
    if bit == 0 { 1 } else { -1 }
}

/// Apply [`ising_trans`] to every bit.
pub fn ising_solution(bits: &[u8]) -> Vec<i8> {
    bits.iter().map(|&b| ising_trans(b)).collect()
}

/// Mapping from physical (embedded) qubit to logical variable.
///
/// Injective by construction: no two qubits map to the same variable and
/// no qubit maps to two variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, usize>", into = "BTreeMap<usize, usize>")]
pub struct InverseEmbedding {
    physical_to_logical: BTreeMap<usize, usize>,
}

impl InverseEmbedding {
    /// Build from `(physical, logical)` pairs.
    pub fn new(pairs: impl IntoIterator<Item = (usize, usize)>) -> IsingResult<Self> {
        let mut physical_to_logical = BTreeMap::new();
        let mut seen: BTreeMap<usize, usize> = BTreeMap::new();
        for (physical, logical) in pairs {
            if let Some(&first) = physical_to_logical.get(&physical) {
                if first != logical {
                    return Err(IsingError::DuplicatePhysical {
                        physical,
                        first,
                        second: logical,
                    });
                }
            }
            if let Some(&first) = seen.get(&logical) {
                if first != physical {
                    return Err(IsingError::DuplicateLogical {
                        logical,
                        first,
                        second: physical,
                    });
                }
            }
            seen.insert(logical, physical);
            physical_to_logical.insert(physical, logical);
        }
        Ok(Self {
            physical_to_logical,
        })
    }

    /// Logical variable on `physical`, if mapped.
    pub fn logical(&self, physical: usize) -> Option<usize> {
        self.physical_to_logical.get(&physical).copied()
    }

    /// Number of mapped qubits.
    pub fn len(&self) -> usize {
        self.physical_to_logical.len()
    }

    /// True if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.physical_to_logical.is_empty()
    }

    /// `(physical, logical)` pairs in ascending physical order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.physical_to_logical.iter().map(|(&p, &l)| (p, l))
    }
}

impl TryFrom<BTreeMap<usize, usize>> for InverseEmbedding {
    type Error = IsingError;

    fn try_from(map: BTreeMap<usize, usize>) -> IsingResult<Self> {
        Self::new(map)
    }
}

impl From<InverseEmbedding> for BTreeMap<usize, usize> {
    fn from(embedding: InverseEmbedding) -> Self {
        embedding.physical_to_logical
    }
}

/// Reorder an embedded solution into logical-variable order.
///
/// `solution[k]` is the value measured on the k-th smallest physical qubit of
/// `inverse`; the result holds, at each logical index, the value measured on
/// the qubit mapped to it. The embedding must cover every logical index
/// `0..inverse.len()`.
///
/// ```rust
/// use qising_core::postprocess::{unembed_solution, InverseEmbedding};
///
/// let inv = InverseEmbedding::new([(20, 0), (13, 2), (23, 1), (15, 3)]).unwrap();
/// assert_eq!(unembed_solution(&[0, 1, 1, 1], &inv).unwrap(), vec![1, 1, 0, 1]);
/// ```
pub fn unembed_solution<T: Copy>(solution: &[T], inverse: &InverseEmbedding) -> IsingResult<Vec<T>> {
    if solution.len() != inverse.len() {
        return Err(IsingError::LengthMismatch {
            expected: inverse.len(),
            got: solution.len(),
        });
    }

    let mut slots: Vec<Option<T>> = vec![None; inverse.len()];
    for (&value, (_, logical)) in solution.iter().zip(inverse.iter()) {
        match slots.get_mut(logical) {
            Some(slot) => *slot = Some(value),
            // A logical index past the end means some smaller one is missing.
            None => break,
        }
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(logical, slot)| slot.ok_or(IsingError::MissingLogical(logical)))
        .collect()
}
