//! Turn sequencing for one human-vs-computer session.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::board::{Board, BoardState};
use crate::common::{GameError, ShotResult};
use crate::config::MAX_AI_TURNS;
use crate::targeting::TargetingEngine;

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Placement,
    InProgress,
    Finished,
}

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Human,
    Computer,
}

/// Serializable session snapshot. Targeting state is deliberately absent: it
/// is session-local and the engine re-derives its pursuit from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub human: BoardState,
    pub computer: BoardState,
    pub phase: GamePhase,
    pub turn: Turn,
}

/// One game session: the human board, the hidden computer board and the
/// computer's targeting engine. Boards are the sole authority on cell state;
/// the engine only reads them and is fed explicit shot outcomes.
pub struct Game {
    human: Board,
    computer: Board,
    ai: TargetingEngine,
    phase: GamePhase,
    turn: Turn,
}

impl Game {
    pub fn new() -> Self {
        Game {
            human: Board::new(),
            computer: Board::new(),
            ai: TargetingEngine::new(),
            phase: GamePhase::Placement,
            turn: Turn::Human,
        }
    }

    /// Back to an empty placement phase for a rematch.
    pub fn reset(&mut self) {
        self.human.clear();
        self.computer.clear();
        self.ai.reset();
        self.phase = GamePhase::Placement;
        self.turn = Turn::Human;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// The human board, mutable during placement.
    pub fn human_board_mut(&mut self) -> &mut Board {
        &mut self.human
    }

    pub fn human_board(&self) -> &Board {
        &self.human
    }

    /// The computer board. Renderers must hide its unhit ships.
    pub fn computer_board(&self) -> &Board {
        &self.computer
    }

    /// Validate the human fleet, auto-place the computer fleet and begin.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.phase != GamePhase::Placement {
            return Err(GameError::WrongPhase);
        }
        self.human.validate_fleet()?;
        self.computer.auto_place(rng)?;
        self.phase = GamePhase::InProgress;
        self.turn = Turn::Human;
        Ok(())
    }

    /// Apply the human's shot at the computer board. A hit or a sink keeps
    /// the turn; a miss hands it to the computer.
    pub fn human_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::WrongPhase);
        }
        if self.turn != Turn::Human {
            return Err(GameError::NotYourTurn);
        }
        let result = self.computer.shoot(row, col)?;
        if !self.computer.has_ships_left() {
            self.phase = GamePhase::Finished;
        } else if result == ShotResult::Miss {
            self.turn = Turn::Computer;
        }
        Ok(result)
    }

    /// Run the computer's turn to completion: it keeps shooting while it
    /// hits. Returns every shot taken with its outcome, in order.
    ///
    /// The loop is capped at [`MAX_AI_TURNS`] consecutive shots; on exceeding
    /// the cap the turn is forcibly handed back.
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<((usize, usize), ShotResult)>, GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(GameError::WrongPhase);
        }
        if self.turn != Turn::Computer {
            return Err(GameError::NotYourTurn);
        }
        let mut shots = Vec::new();
        while self.turn == Turn::Computer && self.phase == GamePhase::InProgress {
            if shots.len() >= MAX_AI_TURNS {
                log::warn!("computer exceeded {} consecutive shots, yielding turn", MAX_AI_TURNS);
                self.turn = Turn::Human;
                break;
            }
            let (row, col) = self.ai.next_shot(rng, &self.human);
            let result = self.human.shoot(row, col)?;
            self.ai.observe_shot((row, col), result, &self.human);
            shots.push(((row, col), result));
            if !self.human.has_ships_left() {
                self.phase = GamePhase::Finished;
            } else if result == ShotResult::Miss {
                self.turn = Turn::Human;
            }
        }
        Ok(shots)
    }

    /// The winner once the game is finished.
    pub fn winner(&self) -> Option<Winner> {
        if self.phase != GamePhase::Finished {
            return None;
        }
        if self.human.has_ships_left() {
            Some(Winner::Human)
        } else {
            Some(Winner::Computer)
        }
    }

    /// Serializable snapshot of the session.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            human: BoardState::from(&self.human),
            computer: BoardState::from(&self.computer),
            phase: self.phase,
            turn: self.turn,
        }
    }

    /// Restore a session from a snapshot. The targeting engine starts fresh;
    /// resolved cells on the human board keep it from repeating shots and
    /// line continuation picks any unfinished pursuit back up from the grid.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        Game {
            human: Board::from(snapshot.human),
            computer: Board::from(snapshot.computer),
            ai: TargetingEngine::new(),
            phase: snapshot.phase,
            turn: snapshot.turn,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
