//! A fixed 10×10 cell mask packed into a `u128`.
//!
//! The mask is the crate's single grid primitive: ship occupancy, shot
//! history and derived sets (hit cells, outline rings, clusters) are all
//! masks combined with bitwise operations. Connected-component extraction is
//! implemented once here and reused by fleet validation, sink detection and
//! the targeting engine.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::config::BOARD_SIZE;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const FULL: u128 = (1u128 << CELLS) - 1;

const fn column(col: usize) -> u128 {
    let mut bits = 0u128;
    let mut row = 0;
    while row < BOARD_SIZE {
        bits |= 1u128 << (row * BOARD_SIZE + col);
        row += 1;
    }
    bits
}

const FIRST_COL: u128 = column(0);
const LAST_COL: u128 = column(BOARD_SIZE - 1);

/// Set of board cells, one bit per cell in row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask {
    bits: u128,
}

impl Mask {
    /// Empty mask.
    #[inline]
    pub const fn new() -> Self {
        Mask { bits: 0 }
    }

    /// Mask covering the whole board.
    #[inline]
    pub const fn full() -> Self {
        Mask { bits: FULL }
    }

    /// Mask with a single cell set. Callers must pass in-bounds coordinates.
    #[inline]
    pub fn cell(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Mask {
            bits: 1u128 << (row * BOARD_SIZE + col),
        }
    }

    /// Number of set cells.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Whether the cell at (row, col) is set.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        (self.bits >> (row * BOARD_SIZE + col)) & 1 != 0
    }

    /// Set the cell at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize) {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        self.bits |= 1u128 << (row * BOARD_SIZE + col);
    }

    /// Clear the cell at (row, col).
    #[inline]
    pub fn clear(&mut self, row: usize, col: usize) {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        self.bits &= !(1u128 << (row * BOARD_SIZE + col));
    }

    /// Flip the cell at (row, col).
    #[inline]
    pub fn toggle(&mut self, row: usize, col: usize) {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        self.bits ^= 1u128 << (row * BOARD_SIZE + col);
    }

    /// First set cell in row-major order.
    pub fn first(&self) -> Option<(usize, usize)> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        Some((idx / BOARD_SIZE, idx % BOARD_SIZE))
    }

    /// Iterator over set cells in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits }
    }

    #[inline]
    fn shift_north(self) -> Self {
        Mask {
            bits: self.bits >> BOARD_SIZE,
        }
    }

    #[inline]
    fn shift_south(self) -> Self {
        Mask {
            bits: (self.bits << BOARD_SIZE) & FULL,
        }
    }

    #[inline]
    fn shift_west(self) -> Self {
        Mask {
            bits: (self.bits & !FIRST_COL) >> 1,
        }
    }

    #[inline]
    fn shift_east(self) -> Self {
        Mask {
            bits: ((self.bits & !LAST_COL) << 1) & FULL,
        }
    }

    /// Cells orthogonally adjacent to any set cell (the set itself excluded
    /// unless its cells neighbour each other).
    pub fn neighbors4(self) -> Self {
        self.shift_north() | self.shift_south() | self.shift_west() | self.shift_east()
    }

    /// Cells diagonally adjacent to any set cell.
    pub fn diagonals(self) -> Self {
        let ns = self.shift_north() | self.shift_south();
        ns.shift_west() | ns.shift_east()
    }

    /// Cells adjacent (8-directional) to any set cell.
    pub fn neighbors8(self) -> Self {
        self.neighbors4() | self.diagonals()
    }

    /// The 4-connected component of `self` containing (row, col). Empty when
    /// the seed cell is not set.
    pub fn component(&self, row: usize, col: usize) -> Self {
        let seed = Mask::cell(row, col) & *self;
        if seed.is_empty() {
            return seed;
        }
        let mut comp = seed;
        loop {
            let grown = (comp | comp.neighbors4()) & *self;
            if grown == comp {
                return comp;
            }
            comp = grown;
        }
    }

    /// All 4-connected components of the mask.
    pub fn components(&self) -> Vec<Mask> {
        let mut out = Vec::new();
        let mut rest = *self;
        while let Some((row, col)) = rest.first() {
            let comp = rest.component(row, col);
            rest &= !comp;
            out.push(comp);
        }
        out
    }

    /// Whether all set cells share one row or one column. Intended for
    /// 4-connected components, where this means a straight contiguous line.
    /// Vacuously true for empty and single-cell masks.
    pub fn is_line(&self) -> bool {
        let mut cells = self.iter();
        let Some((first_row, first_col)) = cells.next() else {
            return true;
        };
        let mut same_row = true;
        let mut same_col = true;
        for (row, col) in cells {
            same_row &= row == first_row;
            same_col &= col == first_col;
        }
        same_row || same_col
    }
}

/// Iterator over the set cells of a [`Mask`].
#[derive(Clone, Copy)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some((idx / BOARD_SIZE, idx % BOARD_SIZE))
    }
}

impl BitAnd for Mask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Mask {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitOr for Mask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Mask {
            bits: self.bits | rhs.bits,
        }
    }
}

impl Not for Mask {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Mask {
            bits: !self.bits & FULL,
        }
    }
}

impl BitAndAssign for Mask {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOrAssign for Mask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Debug for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mask:")?;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = if self.get(row, col) { '■' } else { '□' };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
