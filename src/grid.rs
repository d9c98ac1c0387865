//! Target grid: which cans are still standing in the current round.

use crate::bitboard::BitBoard;
use crate::common::{Coord, GridError, ShotOutcome};
use crate::config::{LCD_COLUMNS, LCD_ROWS};
use core::fmt;

/// A grid of `R×C` cans backed by a `u128` bitboard of alive cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CanGrid<const R: usize, const C: usize> {
    alive: BitBoard<u128, R, C>,
}

/// Grid matching the default display.
pub type DefaultGrid = CanGrid<LCD_ROWS, LCD_COLUMNS>;
/// Grid for a 4×20 display.
pub type Grid4x20 = CanGrid<4, 20>;
/// Grid for a 2×16 display.
pub type Grid2x16 = CanGrid<2, 16>;

impl<const R: usize, const C: usize> CanGrid<R, C> {
    /// Total number of cans on the grid.
    pub const CELLS: usize = R * C;

    /// Create a grid with every can standing.
    ///
    /// Fails when `R*C` does not fit into the backing bitboard.
    pub fn new() -> Result<Self, GridError> {
        let mut alive = BitBoard::try_new()?;
        alive.fill();
        Ok(Self { alive })
    }

    /// Put every can back up.
    pub fn reset(&mut self) {
        self.alive.fill();
    }

    /// Shoot at `(row, col)`.
    ///
    /// A standing can falls and `NewHit` is returned; an empty cell is left
    /// untouched and reported as `Repeat`.
    pub fn hit(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GridError> {
        if self.alive.get(row, col)? {
            self.alive.clear(row, col)?;
            Ok(ShotOutcome::NewHit)
        } else {
            Ok(ShotOutcome::Repeat)
        }
    }

    /// Returns `true` once no can is left standing.
    pub fn all_dead(&self) -> bool {
        self.alive.is_empty()
    }

    /// Number of cans still standing.
    pub fn alive_count(&self) -> usize {
        self.alive.count_ones()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.alive.get(row, col)?)
    }

    /// Positions of the standing cans, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.alive.iter_set_bits()
    }

    /// Bitboard of the cells already knocked over.
    pub fn dead_cells(&self) -> BitBoard<u128, R, C> {
        !self.alive
    }
}

impl<const R: usize, const C: usize> fmt::Debug for CanGrid<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "CanGrid {{ {}x{}, alive: {} }}\n{}",
            R,
            C,
            self.alive_count(),
            self.alive
        )
    }
}
