//! Board state: ship occupancy, shot history and the rules that tie them
//! together (placement validation, fleet validation, sinking and outline
//! clearing).

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{BoardError, CellState, FleetError, Orientation, ShotResult};
use crate::config::{BOARD_SIZE, FLEET};
use crate::mask::Mask;

/// Per-ship random placement attempts before the whole board is retried.
const PLACEMENT_ATTEMPTS: usize = 1000;
/// Whole-board retries before random placement gives up.
const BOARD_ATTEMPTS: usize = 100;

/// Serializable board snapshot. Two masks fully determine a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub ships: Mask,
    pub shots: Mask,
}

/// One side's 10×10 board.
///
/// Cell state is derived from two masks: a cell is `Hit` when both are set,
/// `Ship` when only occupied, `Miss` when only shot, `Empty` otherwise. Ship
/// identity is not stored; a ship is a 4-connected component of the occupancy
/// mask, recovered by flood fill whenever needed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ships: Mask,
    shots: Mask,
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            ships: Mask::new(),
            shots: Mask::new(),
        }
    }

    /// Reset the board to its empty state.
    pub fn clear(&mut self) {
        self.ships = Mask::new();
        self.shots = Mask::new();
    }

    /// State of a single cell. Callers must pass in-bounds coordinates.
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        match (self.ships.get(row, col), self.shots.get(row, col)) {
            (true, true) => CellState::Hit,
            (true, false) => CellState::Ship,
            (false, true) => CellState::Miss,
            (false, false) => CellState::Empty,
        }
    }

    /// Occupancy mask of all ship decks.
    pub fn ships(&self) -> Mask {
        self.ships
    }

    /// Mask of all resolved cells (hits and misses).
    pub fn shots(&self) -> Mask {
        self.shots
    }

    /// Mask of hit ship decks.
    pub fn hits(&self) -> Mask {
        self.ships & self.shots
    }

    /// Mask of shots that landed in open water.
    pub fn misses(&self) -> Mask {
        self.shots & !self.ships
    }

    /// Whether (row, col) is a legal target: in bounds and not yet resolved.
    pub fn shootable(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE && !self.shots.get(row, col)
    }

    /// Occupancy mask for a prospective ship, or an error when it would
    /// extend past the board edge.
    fn line_mask(
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<Mask, BoardError> {
        let fits = match orientation {
            Orientation::Horizontal => row < BOARD_SIZE && col + length <= BOARD_SIZE,
            Orientation::Vertical => col < BOARD_SIZE && row + length <= BOARD_SIZE,
        };
        if length == 0 || !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mut mask = Mask::new();
        for i in 0..length {
            match orientation {
                Orientation::Horizontal => mask.set(row, col + i),
                Orientation::Vertical => mask.set(row + i, col),
            }
        }
        Ok(mask)
    }

    /// Whether a ship of `length` can start at (row, col): in bounds, no
    /// overlap and no contact (8-directional) with an existing ship.
    pub fn can_place_ship(
        &self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> bool {
        match Self::line_mask(row, col, length, orientation) {
            Ok(mask) => ((mask | mask.neighbors8()) & self.ships).is_empty(),
            Err(_) => false,
        }
    }

    /// Place a ship. Advisory: on failure the board is untouched and the
    /// caller is expected to retry with different parameters.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let mask = Self::line_mask(row, col, length, orientation)?;
        if !((mask | mask.neighbors8()) & self.ships).is_empty() {
            return Err(BoardError::PlacementBlocked);
        }
        self.ships |= mask;
        Ok(())
    }

    /// Flip a single cell between `Empty` and `Ship` for manual fleet
    /// editing. Rejected once the cell has been shot at.
    pub fn toggle_ship_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.shots.get(row, col) {
            return Err(BoardError::AlreadyResolved { row, col });
        }
        self.ships.toggle(row, col);
        Ok(())
    }

    /// Validate the whole layout: no diagonal contact between ships, every
    /// ship a straight line, sizes matching the standard fleet.
    pub fn validate_fleet(&self) -> Result<(), FleetError> {
        let contact = self.ships & self.ships.diagonals();
        if let Some((row, col)) = contact.first() {
            return Err(FleetError::DiagonalContact { row, col });
        }

        let clusters = self.ships.components();
        let mut sizes: Vec<usize> = Vec::with_capacity(clusters.len());
        for cluster in &clusters {
            if !cluster.is_line() {
                if let Some((row, col)) = cluster.first() {
                    return Err(FleetError::NotStraight { row, col });
                }
            }
            sizes.push(cluster.count());
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        if sizes[..] != FLEET {
            return Err(FleetError::BadComposition);
        }
        Ok(())
    }

    /// Apply a shot at (row, col).
    ///
    /// Returns an error (shot not applied) for out-of-bounds coordinates and
    /// for cells that are already resolved. When the shot sinks a ship, every
    /// empty cell around that ship is marked as a miss, since the no-contact
    /// rule guarantees it cannot hold another ship.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.shots.get(row, col) {
            return Err(BoardError::AlreadyResolved { row, col });
        }
        self.shots.set(row, col);
        if !self.ships.get(row, col) {
            return Ok(ShotResult::Miss);
        }
        let ship = self.ships.component(row, col);
        if (ship & !self.shots).is_empty() {
            self.shots |= ship.neighbors8() & !self.ships;
            Ok(ShotResult::Sunk)
        } else {
            Ok(ShotResult::Hit)
        }
    }

    /// Whether any undiscovered or partially hit ship remains.
    pub fn has_ships_left(&self) -> bool {
        !(self.ships & !self.shots).is_empty()
    }

    /// Number of ships not yet fully sunk. Recomputed by flood fill; the
    /// board is only 100 cells, so there is nothing worth caching.
    pub fn ships_remaining(&self) -> usize {
        self.ships
            .components()
            .iter()
            .filter(|ship| !(**ship & !self.shots).is_empty())
            .count()
    }

    /// Pick a random position where a ship of `length` fits, respecting the
    /// no-contact rule against already placed ships.
    pub fn random_ship_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let row = rng.random_range(0..BOARD_SIZE);
            let col = rng.random_range(0..BOARD_SIZE);
            if self.can_place_ship(row, col, length, orientation) {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceFleet)
    }

    /// Clear the board and place the full standard fleet at random. Restarts
    /// from an empty board when a partial layout leaves no room.
    pub fn auto_place<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for _ in 0..BOARD_ATTEMPTS {
            self.clear();
            let mut placed_all = true;
            for &length in FLEET.iter() {
                match self.random_ship_placement(rng, length) {
                    Ok((row, col, orientation)) => {
                        self.place_ship(row, col, length, orientation)?;
                    }
                    Err(_) => {
                        placed_all = false;
                        break;
                    }
                }
            }
            if placed_all {
                return Ok(());
            }
        }
        Err(BoardError::UnableToPlaceFleet)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ships: {:?},\n  shots: {:?}\n}}",
            self.ships, self.shots
        )
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        BoardState {
            ships: board.ships,
            shots: board.shots,
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            ships: state.ships,
            shots: state.shots,
        }
    }
}
