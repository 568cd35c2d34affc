//! Static position evaluation.
//!
//! Scores are centipawns from White's perspective: positive favors White,
//! negative favors Black.

pub mod material;
pub mod standard;

use tempo_core::Board;

pub use material::MaterialEvaluator;
pub use standard::StandardEvaluator;

/// Scores a board for the search.
///
/// `depth` is the search depth still remaining when the board is scored,
/// so evaluators can prefer mates found closer to the root.
pub trait BoardEvaluator: Send + Sync {
    fn evaluate(&self, board: &Board, depth: u32) -> i32;
}

impl<E: BoardEvaluator + ?Sized> BoardEvaluator for &E {
    fn evaluate(&self, board: &Board, depth: u32) -> i32 {
        (**self).evaluate(board, depth)
    }
}
