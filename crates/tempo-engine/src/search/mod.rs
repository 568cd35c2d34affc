//! Move selection strategies and the background search worker.

pub mod minimax;
pub mod worker;

use std::time::Duration;

use tempo_core::{Board, Move};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move, or [`Move::Null`] when the side to move has no legal move.
    pub best_move: Move,
    /// Score of the best move in centipawns from White's perspective.
    pub score: i32,
    /// Total positions visited during the search.
    pub nodes: u64,
    /// Depth the search was run at.
    pub depth: u32,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

/// Chooses a move for the side to move.
pub trait MoveStrategy: Send + Sync {
    /// Search `board` to `depth` plies and report the outcome.
    fn search(&self, board: &Board, depth: u32) -> SearchResult;

    /// Search `board` and return only the chosen move.
    fn execute(&self, board: &Board, depth: u32) -> Move {
        self.search(board, depth).best_move
    }
}
