//! Fixed game parameters: board geometry and fleet composition.

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Number of ships in a complete fleet.
pub const NUM_SHIPS: usize = 10;

/// Fleet composition by ship length, longest first. One battleship, two
/// cruisers, three destroyers, four submarines.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total deck count of a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 20;

/// Upper bound on consecutive computer shots in one turn. The computer keeps
/// shooting while it hits; this guards against a runaway loop if the turn
/// rule ever changes.
pub const MAX_AI_TURNS: usize = 200;
