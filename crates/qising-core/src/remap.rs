//! Logical-to-physical qubit index policies.
//!
//! Problem variables keep their user-facing numbering; a [`QubitRemap`]
//! decides which physical qubit each one lands on. The default policy,
//! [`ReservedQubitShift`], steps over a single unusable qubit.

use std::fmt;

/// Bidirectional mapping between logical variables and physical qubits.
pub trait QubitRemap: fmt::Debug + Send + Sync {
    /// Physical qubit for a logical variable.
    fn to_physical(&self, logical: usize) -> usize;

    /// Logical variable placed on a physical qubit, or `None` if the qubit
    /// is not used by any variable.
    fn to_logical(&self, physical: usize) -> Option<usize>;
}

impl<R: QubitRemap + ?Sized> QubitRemap for &R {
    fn to_physical(&self, logical: usize) -> usize {
        (**self).to_physical(logical)
    }

    fn to_logical(&self, physical: usize) -> Option<usize> {
        (**self).to_logical(physical)
    }
}

impl<R: QubitRemap + ?Sized> QubitRemap for Box<R> {
    fn to_physical(&self, logical: usize) -> usize {
        (**self).to_physical(logical)
    }

    fn to_logical(&self, physical: usize) -> Option<usize> {
        (**self).to_logical(physical)
    }
}

/// Logical variable `i` sits on physical qubit `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityRemap;

impl QubitRemap for IdentityRemap {
    fn to_physical(&self, logical: usize) -> usize {
        logical
    }

    fn to_logical(&self, physical: usize) -> Option<usize> {
        Some(physical)
    }
}

/// Skip one permanently unusable physical qubit.
///
/// Variables below the reserved index keep their number; variables at or
/// above it move up by one. The reserved qubit itself maps to no variable.
///
/// ```rust
/// use qising_core::remap::{QubitRemap, ReservedQubitShift};
///
/// let remap = ReservedQubitShift::default();
/// assert_eq!(remap.to_physical(2), 2);
/// assert_eq!(remap.to_physical(3), 4);
/// assert_eq!(remap.to_logical(4), Some(3));
/// assert_eq!(remap.to_logical(3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedQubitShift {
    reserved: usize,
}

impl ReservedQubitShift {
    /// Dead qubit on the reference device.
    pub const DEFAULT_RESERVED: usize = 3;

    /// Reserve physical qubit `reserved`.
    pub fn new(reserved: usize) -> Self {
        Self { reserved }
    }

    /// The reserved physical qubit.
    pub fn reserved(&self) -> usize {
        self.reserved
    }
}

impl Default for ReservedQubitShift {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RESERVED)
    }
}

impl QubitRemap for ReservedQubitShift {
    fn to_physical(&self, logical: usize) -> usize {
        if logical >= self.reserved {
            logical + 1
        } else {
            logical
        }
    }

    fn to_logical(&self, physical: usize) -> Option<usize> {
        match physical.cmp(&self.reserved) {
            std::cmp::Ordering::Less => Some(physical),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(physical - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_round_trips_every_logical_index() {
        let remap = ReservedQubitShift::default();
        for logical in 0..16 {
            let physical = remap.to_physical(logical);
            assert_ne!(physical, remap.reserved());
            assert_eq!(remap.to_logical(physical), Some(logical));
        }
    }

    #[test]
    fn test_custom_reserved_qubit() {
        let remap = ReservedQubitShift::new(0);
        assert_eq!(remap.to_physical(0), 1);
        assert_eq!(remap.to_logical(0), None);
        assert_eq!(remap.to_logical(1), Some(0));
    }

    #[test]
    fn test_identity() {
        assert_eq!(IdentityRemap.to_physical(3), 3);
        assert_eq!(IdentityRemap.to_logical(3), Some(3));
    }

    #[test]
    fn test_boxed_remap() {
        let remap: Box<dyn QubitRemap> = Box::new(ReservedQubitShift::default());
        assert_eq!(remap.to_physical(5), 6);
    }
}
