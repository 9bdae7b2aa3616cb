//! Player abstraction and the built-in computer player.

use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::targeting::TargetingEngine;

/// Interface implemented by the different player types.
pub trait Player {
    /// Place the full fleet onto the provided board.
    fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<(), BoardError>;

    /// Choose the next target given the opponent board's public state.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, enemy: &Board) -> (usize, usize);

    /// Inform the player of the result of its own shot.
    fn handle_shot_result(
        &mut self,
        _coord: (usize, usize),
        _result: ShotResult,
        _enemy: &Board,
    ) {
    }

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: (usize, usize), _result: ShotResult) {}
}

/// Computer player backed by the hunt/target engine.
pub struct AiPlayer {
    engine: TargetingEngine,
}

impl AiPlayer {
    pub fn new() -> Self {
        AiPlayer {
            engine: TargetingEngine::new(),
        }
    }

    /// Read access to the underlying engine, mainly for inspecting its phase.
    pub fn engine(&self) -> &TargetingEngine {
        &self.engine
    }

    /// Clear targeting state for a new game.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_ships<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
    ) -> Result<(), BoardError> {
        board.auto_place(rng)
    }

    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R, enemy: &Board) -> (usize, usize) {
        self.engine.next_shot(rng, enemy)
    }

    fn handle_shot_result(&mut self, coord: (usize, usize), result: ShotResult, enemy: &Board) {
        self.engine.observe_shot(coord, result, enemy);
    }
}
