//! A fixed-size bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `R×C` grid packed row-major into an unsigned integer `T`.

use core::ops::Not;
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size R*C exceeds capacity of `T::BITS`.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: R*C={} exceeds T::BITS={}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A fixed-size R×C bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const R: usize, const C: usize> BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`R * C`).
    pub const CELLS: usize = R * C;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if R*C > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(BitBoardError::SizeTooLarge {
                cells: Self::CELLS,
                capacity,
            })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(row, col)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(row, col)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Sets all board bits to `1`.
    #[inline]
    pub fn fill(&mut self) {
        self.bits = Self::mask();
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, BitBoardError> {
        if row >= R || col >= C {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * C + col)
        }
    }

    /// Iterator over the set bits of the board, row-major.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, R, C> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn bit_at(&self, idx: usize) -> bool {
        ((self.bits >> idx) & T::one()) != T::zero()
    }
}

impl<T, const R: usize, const C: usize> Default for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}, {}>:", any::type_name::<T>(), R, C)?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl<T, const R: usize, const C: usize> fmt::Display for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..R {
            for c in 0..C {
                let bit = if self.bit_at(r * C + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, R, C>,
    idx: usize,
}

impl<'a, T, const R: usize, const C: usize> Iterator for SetBits<'a, T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < R * C {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit_at(idx) {
                return Some((idx / C, idx % C));
            }
        }
        None
    }
}

/// Bitwise NOT, confined to the board's `R*C` bits.
impl<T, const R: usize, const C: usize> Not for BitBoard<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
