//! Common types: cell states, shot outcomes and error enums.

/// State of a single board cell. Cells only ever progress
/// (`Empty -> Ship -> Hit`, `Empty -> Miss`); nothing reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Outcome of an applied shot. A rejected shot (out of bounds or a cell that
/// was already resolved) is a [`BoardError`], not a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that still has unhit decks.
    Hit,
    /// Shot struck the last remaining deck of a ship.
    Sunk,
}

/// Errors returned by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already shot at; re-shooting is a caller bug, not a miss.
    AlreadyResolved { row: usize, col: usize },
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship would overlap or touch another ship.
    PlacementBlocked,
    /// Random placement gave up before finding room for the whole fleet.
    UnableToPlaceFleet,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is out of bounds", row, col)
            }
            BoardError::AlreadyResolved { row, col } => {
                write!(f, "cell ({}, {}) was already shot at", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::PlacementBlocked => {
                write!(f, "ship placement overlaps or touches another ship")
            }
            BoardError::UnableToPlaceFleet => write!(f, "unable to place the fleet randomly"),
        }
    }
}

/// Fleet validation failures, one variant per reason reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// Two ships touch diagonally at the given cell.
    DiagonalContact { row: usize, col: usize },
    /// The ship containing the given cell is not a straight line.
    NotStraight { row: usize, col: usize },
    /// Ship sizes do not match one 4, two 3s, three 2s and four 1s.
    BadComposition,
}

impl core::fmt::Display for FleetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FleetError::DiagonalContact { row, col } => {
                write!(f, "ships must not touch diagonally (at {}, {})", row, col)
            }
            FleetError::NotStraight { row, col } => {
                write!(f, "ship must be a straight line (at {}, {})", row, col)
            }
            FleetError::BadComposition => write!(f, "incorrect fleet composition"),
        }
    }
}

/// Errors surfaced by the game session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Fleet(FleetError),
    /// Operation is not valid in the current game phase.
    WrongPhase,
    /// Shot attempted while it is the other side's turn.
    NotYourTurn,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<FleetError> for GameError {
    fn from(err: FleetError) -> Self {
        GameError::Fleet(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "board error: {}", e),
            GameError::Fleet(e) => write!(f, "fleet error: {}", e),
            GameError::WrongPhase => write!(f, "operation not valid in this game phase"),
            GameError::NotYourTurn => write!(f, "not your turn"),
        }
    }
}
