//! Fixed-depth minimax without pruning.
//!
//! White maximizes and Black minimizes the evaluator's score. Only moves
//! whose transition is DONE are explored; a position with none is scored
//! statically as checkmate or stalemate.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use tempo_core::{Board, Move};

use crate::eval::{BoardEvaluator, StandardEvaluator};

use super::{MoveStrategy, SearchResult};

/// Minimax search over an evaluator `E`.
#[derive(Debug, Clone, Default)]
pub struct MiniMax<E = StandardEvaluator> {
    evaluator: E,
}

impl MiniMax<StandardEvaluator> {
    /// Minimax with the [`StandardEvaluator`].
    pub fn new() -> Self {
        Self { evaluator: StandardEvaluator }
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Score every playable root move at `depth`, in generation order.
    ///
    /// Depth 0 scores each resulting board directly, the same as depth 1.
    pub fn rank_moves(&self, board: &Board, depth: u32) -> Vec<(Move, i32)> {
        let mut nodes = 0;
        self.rank(board, depth, &mut nodes)
    }

    fn rank(&self, board: &Board, depth: u32, nodes: &mut u64) -> Vec<(Move, i32)> {
        let player = board.current_player();
        let maximizing = player.color().is_white();
        let child_depth = depth.saturating_sub(1);

        let mut ranked = Vec::with_capacity(player.legal_moves().len());
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if !transition.is_done() {
                continue;
            }
            let child = transition.to_board();
            let score = if maximizing {
                self.min(child, child_depth, nodes)
            } else {
                self.max(child, child_depth, nodes)
            };
            ranked.push((mv.clone(), score));
        }
        ranked
    }

    fn min(&self, board: &Board, depth: u32, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth == 0 || is_game_over(board) {
            return self.evaluator.evaluate(board, depth);
        }

        let player = board.current_player();
        let mut lowest = i32::MAX;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.is_done() {
                lowest = lowest.min(self.max(transition.to_board(), depth - 1, nodes));
            }
        }
        lowest
    }

    fn max(&self, board: &Board, depth: u32, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth == 0 || is_game_over(board) {
            return self.evaluator.evaluate(board, depth);
        }

        let player = board.current_player();
        let mut highest = i32::MIN;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.is_done() {
                highest = highest.max(self.min(transition.to_board(), depth - 1, nodes));
            }
        }
        highest
    }
}

fn is_game_over(board: &Board) -> bool {
    let player = board.current_player();
    player.is_in_checkmate() || player.is_in_stalemate()
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn search(&self, board: &Board, depth: u32) -> SearchResult {
        let start = Instant::now();
        let player = board.current_player();
        info!(side = %player, depth, "search started");

        let mut nodes = 1;
        let ranked = self.rank(board, depth, &mut nodes);

        // Earliest move wins ties.
        let maximizing = player.color().is_white();
        let mut best: Option<&(Move, i32)> = None;
        for entry in &ranked {
            let better = match best {
                None => true,
                Some((_, score)) if maximizing => entry.1 > *score,
                Some((_, score)) => entry.1 < *score,
            };
            if better {
                best = Some(entry);
            }
        }

        let (best_move, score) = match best {
            Some((mv, score)) => (mv.clone(), *score),
            None => (Move::Null, self.evaluator.evaluate(board, depth)),
        };
        let elapsed = start.elapsed();
        debug!(
            best = %best_move,
            score,
            nodes,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        SearchResult { best_move, score, nodes, depth, elapsed }
    }
}

impl<E> fmt::Display for MiniMax<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MiniMax")
    }
}

#[cfg(test)]
mod tests {
    use super::MiniMax;
    use crate::eval::{BoardEvaluator, MaterialEvaluator, StandardEvaluator};
    use crate::search::MoveStrategy;
    use tempo_core::{Board, Move};

    const SCHOLARS_MATE: &str =
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";

    #[test]
    fn depth_zero_ranking_matches_evaluator() {
        let board = Board::starting_position();
        let minimax = MiniMax::new();
        let ranked = minimax.rank_moves(&board, 0);
        assert_eq!(ranked.len(), 20);
        let player = board.current_player();
        for (mv, score) in &ranked {
            let child = player.make_move(mv).into_board();
            assert_eq!(*score, StandardEvaluator.evaluate(&child, 0), "{mv}");
        }
    }

    #[test]
    fn depth_zero_behaves_like_depth_one() {
        let board = Board::starting_position();
        let minimax = MiniMax::new();
        assert_eq!(minimax.rank_moves(&board, 0), minimax.rank_moves(&board, 1));
    }

    #[test]
    fn finds_mate_in_one() {
        let board: Board = SCHOLARS_MATE.parse().unwrap();
        let minimax = MiniMax::new();
        for depth in 1..=2 {
            let result = minimax.search(&board, depth);
            assert_eq!(result.best_move.to_uci(), "h5f7", "depth {depth}");
            assert_eq!(result.depth, depth);
            assert!(result.nodes > 1);
        }
    }

    #[test]
    fn black_minimizes() {
        // The rook wins the queen on d1.
        let board: Board = "4k3/8/8/8/3r4/8/8/3QK3 b - - 0 1".parse().unwrap();
        let minimax = MiniMax::with_evaluator(MaterialEvaluator);
        let result = minimax.search(&board, 1);
        assert_eq!(result.best_move.to_uci(), "d4d1");
        assert_eq!(result.score, -500);
        assert_eq!(minimax.execute(&board, 1), result.best_move);
    }

    #[test]
    fn ties_keep_earliest_move() {
        // Every quiet move scores the same on material alone.
        let board = Board::starting_position();
        let minimax = MiniMax::with_evaluator(MaterialEvaluator);
        let result = minimax.search(&board, 1);
        let first_done = board.current_player().legal_moves()[0].clone();
        assert_eq!(result.best_move, first_done);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn no_moves_returns_null() {
        let board: Board = "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let result = MiniMax::new().search(&board, 2);
        assert_eq!(result.best_move, Move::Null);
        assert_eq!(result.score, StandardEvaluator.evaluate(&board, 2));
    }

    #[test]
    fn mated_root_at_large_depth() {
        let board: Board =
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1".parse().unwrap();
        let result = MiniMax::new().search(&board, 3_000);
        assert_eq!(result.best_move, Move::Null);
        assert_eq!(result.depth, 3_000);
        assert_eq!(result.score, StandardEvaluator.evaluate(&board, 3_000));
        assert!(result.score < 0);
    }
}
