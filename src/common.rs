//! Common types for the shooting gallery: grid errors and shot outcomes.

use crate::bitboard::BitBoardError;

/// A cell position as `(row, col)`.
pub type Coord = (usize, usize);

/// Result of applying one shot to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot knocked over a can that was still standing.
    NewHit,
    /// The cell was already empty; nothing changed.
    Repeat,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Underlying bitboard error (board too large or index out of range).
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for GridError {
    fn from(err: BitBoardError) -> Self {
        GridError::BitBoard(err)
    }
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
