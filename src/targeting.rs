//! Computer shot selection: hunt by checkerboard parity, switch to
//! directional line continuation after a hit, clear tracking after a kill.
//!
//! The engine never mutates the opponent board. It reads the public cell
//! states (hits, misses, unresolved cells) and is told the outcome of each of
//! its own shots through [`TargetingEngine::observe_shot`].

#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use rand::Rng;

use crate::board::Board;
use crate::common::ShotResult;
use crate::config::BOARD_SIZE;
use crate::mask::Mask;

/// Search phase of the engine. Derived from observed outcomes rather than
/// from an external mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No shots observed yet (fresh engine or just reset).
    Idle,
    /// No unresolved hit to pursue; scanning by checkerboard parity.
    Hunting,
    /// An unfinished hit cluster is being pursued to completion.
    Targeting,
}

/// Stateful shot chooser for one opponent-tracking session.
pub struct TargetingEngine {
    /// Coordinates this engine has fired upon. Never re-fired.
    history: Mask,
    /// Candidates adjacent to confirmed hits; front = most recent, so the
    /// current target is pursued depth-first.
    high: VecDeque<(usize, usize)>,
    /// Lower-confidence candidates. The default strategy never fills this
    /// queue, but it is consumed after `high` so alternative strategies can
    /// seed it via [`TargetingEngine::push_low`].
    low: VecDeque<(usize, usize)>,
    phase: Phase,
}

impl TargetingEngine {
    pub fn new() -> Self {
        TargetingEngine {
            history: Mask::new(),
            high: VecDeque::new(),
            low: VecDeque::new(),
            phase: Phase::Idle,
        }
    }

    /// Current search phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of shots fired so far in this session.
    pub fn shots_fired(&self) -> usize {
        self.history.count()
    }

    /// Queue a low-confidence candidate. Consumed after all high-priority
    /// candidates; stale entries are discarded silently.
    pub fn push_low(&mut self, row: usize, col: usize) {
        self.low.push_back((row, col));
    }

    /// Forget everything; called at the start of each new game.
    pub fn reset(&mut self) {
        self.history = Mask::new();
        self.high.clear();
        self.low.clear();
        self.phase = Phase::Idle;
    }

    fn targetable(&self, board: &Board, row: usize, col: usize) -> bool {
        board.shootable(row, col) && !self.history.get(row, col)
    }

    /// Choose the next shot against `board`.
    ///
    /// Priority order: continue an unfinished hit line, then queued
    /// candidates, then a random checkerboard-parity cell. The final
    /// fallbacks (linear scan, then (0, 0)) are unreachable in a well-formed
    /// game and only keep the return type total.
    pub fn next_shot<R: Rng + ?Sized>(&mut self, rng: &mut R, board: &Board) -> (usize, usize) {
        if let Some(coord) = self.pursue_hits(board) {
            self.phase = Phase::Targeting;
            return coord;
        }
        while let Some((row, col)) = self.high.pop_front() {
            if self.targetable(board, row, col) {
                self.phase = Phase::Targeting;
                return (row, col);
            }
        }
        while let Some((row, col)) = self.low.pop_front() {
            if self.targetable(board, row, col) {
                self.phase = Phase::Targeting;
                return (row, col);
            }
        }
        self.phase = Phase::Hunting;
        self.cold_search(rng, board)
    }

    /// Find a continuation shot for any unfinished hit cluster.
    ///
    /// A cluster with an established axis (two or more collinear hits) is
    /// extended at its open ends. A single hit, or an irregular cluster that
    /// straight-line ships should never produce, falls back to any shootable
    /// orthogonal neighbour. Fully sunk clusters yield nothing because
    /// outline clearing has resolved every surrounding cell.
    fn pursue_hits(&self, board: &Board) -> Option<(usize, usize)> {
        let hits = board.hits();
        let mut seen = Mask::new();
        for (row, col) in hits.iter() {
            if seen.get(row, col) {
                continue;
            }
            let cluster = hits.component(row, col);
            seen |= cluster;
            if let Some(coord) = self.continue_cluster(board, cluster) {
                return Some(coord);
            }
        }
        None
    }

    fn continue_cluster(&self, board: &Board, cluster: Mask) -> Option<(usize, usize)> {
        if cluster.count() >= 2 && cluster.is_line() {
            for (row, col) in line_ends(cluster) {
                if self.targetable(board, row, col) {
                    return Some((row, col));
                }
            }
            return None;
        }
        for (row, col) in cluster.iter() {
            for (nr, nc) in orthogonal_neighbors(row, col) {
                if self.targetable(board, nr, nc) {
                    return Some((nr, nc));
                }
            }
        }
        None
    }

    /// Two-pass checkerboard scan: random even-parity cell first, then odd.
    /// Parity-0 alone covers every ship of length >= 2; the linear pass picks
    /// up any remaining single-deck candidates.
    fn cold_search<R: Rng + ?Sized>(&self, rng: &mut R, board: &Board) -> (usize, usize) {
        for parity in 0..2 {
            let candidates: Vec<(usize, usize)> = (0..BOARD_SIZE)
                .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
                .filter(|&(row, col)| {
                    (row + col) % 2 == parity && self.targetable(board, row, col)
                })
                .collect();
            if !candidates.is_empty() {
                return candidates[rng.random_range(0..candidates.len())];
            }
        }
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.targetable(board, row, col) {
                    return (row, col);
                }
            }
        }
        log::warn!("no shootable cell left on the opponent board, falling back to (0, 0)");
        (0, 0)
    }

    /// Record the outcome of a shot this engine chose.
    pub fn observe_shot(
        &mut self,
        coord: (usize, usize),
        result: ShotResult,
        board: &Board,
    ) {
        let (row, col) = coord;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            self.history.set(row, col);
        }
        match result {
            ShotResult::Hit => {
                // Most recent hit's neighbours go to the front so the
                // current target is finished before older leads.
                for (nr, nc) in orthogonal_neighbors(row, col) {
                    if self.targetable(board, nr, nc) {
                        self.high.push_front((nr, nc));
                    }
                }
                self.phase = Phase::Targeting;
            }
            ShotResult::Sunk => {
                // Outline clearing around the kill invalidates nearby
                // candidates; drop everything that is no longer shootable.
                self.high
                    .retain(|&(r, c)| board.shootable(r, c) && !self.history.get(r, c));
                self.low
                    .retain(|&(r, c)| board.shootable(r, c) && !self.history.get(r, c));
                self.phase = Phase::Hunting;
            }
            ShotResult::Miss => {
                if self.phase == Phase::Idle {
                    self.phase = Phase::Hunting;
                }
            }
        }
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// In-bounds orthogonal neighbours of (row, col).
fn orthogonal_neighbors(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let candidates = [
        (row.wrapping_sub(1), col),
        (row + 1, col),
        (row, col.wrapping_sub(1)),
        (row, col + 1),
    ];
    candidates
        .into_iter()
        .filter(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE)
}

/// The two cells one past the extent of a collinear hit cluster, clipped to
/// the board.
fn line_ends(cluster: Mask) -> impl Iterator<Item = (usize, usize)> {
    let mut min_row = BOARD_SIZE;
    let mut max_row = 0;
    let mut min_col = BOARD_SIZE;
    let mut max_col = 0;
    for (row, col) in cluster.iter() {
        min_row = min_row.min(row);
        max_row = max_row.max(row);
        min_col = min_col.min(col);
        max_col = max_col.max(col);
    }
    let horizontal = min_row == max_row;
    let ends = if horizontal {
        [
            (min_row, min_col.wrapping_sub(1)),
            (min_row, max_col + 1),
        ]
    } else {
        [
            (min_row.wrapping_sub(1), min_col),
            (max_row + 1, min_col),
        ]
    };
    ends.into_iter()
        .filter(|&(r, c)| r < BOARD_SIZE && c < BOARD_SIZE)
}
