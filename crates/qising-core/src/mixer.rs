//! XY mixer for one-hot encoded moves.
//!
//! Each move of a walk is encoded with four qubits, exactly one of which is
//! set:
//!
//! ```text
//!   right: 1000   left: 0100   up: 0010   down: 0001
//! ```
//!
//! The plain transverse-field mixer leaves this subspace. The XY mixer
//! instead couples every pair of direction qubits of a move with
//! `½(X_a X_b + Y_a Y_b)`, which swaps an excitation between the two and
//! keeps the Hamming weight of the block fixed (Hadfield et al., *Quantum
//! Approximate Optimization with Hard and Soft Constraints*, 2017).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IsingError, IsingResult};
use crate::pauli::{PauliSum, PauliTerm};

/// Qubits per one-hot move block.
pub const QUBITS_PER_MOVE: usize = 4;

/// Weight of each XX and YY term.
pub const XY_WEIGHT: f64 = 0.5;

/// Direction of a single move, in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `r`
    Right,
    /// `l`
    Left,
    /// `u`
    Up,
    /// `d`
    Down,
}

impl Direction {
    /// All directions in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Offset of this direction inside its move block.
    pub fn position(self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// One-letter symbol.
    pub fn symbol(self) -> char {
        match self {
            Direction::Right => 'r',
            Direction::Left => 'l',
            Direction::Up => 'u',
            Direction::Down => 'd',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Direction {
    type Err = IsingError;

    fn from_str(s: &str) -> IsingResult<Self> {
        match s.to_lowercase().as_str() {
            "r" | "right" => Ok(Direction::Right),
            "l" | "left" => Ok(Direction::Left),
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            _ => Err(IsingError::UnknownDirection(s.to_string())),
        }
    }
}

/// Flat index of the qubit that is set when move `move_number` (1-based)
/// goes in `direction`.
///
/// ```rust
/// use qising_core::mixer::{indicator_qubit_index, Direction};
///
/// assert_eq!(indicator_qubit_index(1, Direction::Right).unwrap(), 0);
/// assert_eq!(indicator_qubit_index(2, Direction::Up).unwrap(), 6);
/// ```
pub fn indicator_qubit_index(move_number: usize, direction: Direction) -> IsingResult<usize> {
    if move_number == 0 {
        return Err(IsingError::InvalidMove(move_number));
    }
    Ok(QUBITS_PER_MOVE * (move_number - 1) + direction.position())
}

/// Generator for the one-hot XY mixer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHotMixer {
    /// Also mix the last move block. Off by default, which leaves the final
    /// move without mixing terms.
    #[serde(default)]
    pub include_final_move: bool,
}

impl OneHotMixer {
    /// Mixer that skips the final move block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose whether the final move block is mixed.
    #[must_use]
    pub fn with_final_move(mut self, include: bool) -> Self {
        self.include_final_move = include;
        self
    }

    /// Number of move blocks that receive mixing terms for `num_qubits`.
    pub fn mixed_moves(&self, num_qubits: usize) -> IsingResult<usize> {
        if num_qubits % QUBITS_PER_MOVE != 0 {
            return Err(IsingError::NotOneHot(num_qubits));
        }
        let num_moves = num_qubits / QUBITS_PER_MOVE;
        Ok(if self.include_final_move {
            num_moves
        } else {
            num_moves.saturating_sub(1)
        })
    }

    /// Mixer operators for `num_qubits` one-hot qubits.
    ///
    /// For each mixed move and each unordered pair of its direction qubits
    /// `(a, b)`, emits `½ X_a X_b` followed by `½ Y_a Y_b`.
    pub fn generate(&self, num_qubits: usize) -> IsingResult<Vec<PauliSum>> {
        let moves = self.mixed_moves(num_qubits)?;
        let mut operators = Vec::with_capacity(moves * 12);

        for move_number in 1..=moves {
            for (pos, &turn) in Direction::ALL.iter().enumerate() {
                for &alt_turn in &Direction::ALL[pos + 1..] {
                    let a = indicator_qubit_index(move_number, turn)?;
                    let b = indicator_qubit_index(move_number, alt_turn)?;
                    operators.push(PauliSum::from(
                        PauliTerm::x(a, XY_WEIGHT) * PauliTerm::x(b, 1.0),
                    ));
                    operators.push(PauliSum::from(
                        PauliTerm::y(a, XY_WEIGHT) * PauliTerm::y(b, 1.0),
                    ));
                }
            }
        }

        debug!(
            num_qubits,
            mixed_moves = moves,
            terms = operators.len(),
            "generated one-hot XY mixer"
        );
        Ok(operators)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parse() {
        assert_eq!("r".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("Down".parse::<Direction>().unwrap(), Direction::Down);
        assert!(matches!(
            "x".parse::<Direction>(),
            Err(IsingError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_indicator_index() {
        assert_eq!(indicator_qubit_index(1, Direction::Down).unwrap(), 3);
        assert_eq!(indicator_qubit_index(3, Direction::Left).unwrap(), 9);
        assert_eq!(
            indicator_qubit_index(0, Direction::Right),
            Err(IsingError::InvalidMove(0))
        );
    }

    #[test]
    fn test_mixed_moves() {
        let mixer = OneHotMixer::new();
        assert_eq!(mixer.mixed_moves(0).unwrap(), 0);
        assert_eq!(mixer.mixed_moves(4).unwrap(), 0);
        assert_eq!(mixer.mixed_moves(12).unwrap(), 2);
        assert_eq!(mixer.with_final_move(true).mixed_moves(12).unwrap(), 3);
        assert_eq!(mixer.mixed_moves(6), Err(IsingError::NotOneHot(6)));
    }
}
