//! Material balance evaluation.

use tempo_core::{Board, Player};

use super::BoardEvaluator;

/// Sum of the piece values of `player`'s active pieces, king included.
pub fn material(player: &Player<'_>) -> i32 {
    player.active_pieces().iter().map(|piece| piece.value()).sum()
}

/// Scores a board by material difference alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl BoardEvaluator for MaterialEvaluator {
    fn evaluate(&self, board: &Board, _depth: u32) -> i32 {
        material(&board.white_player()) - material(&board.black_player())
    }
}

#[cfg(test)]
mod tests {
    use super::{MaterialEvaluator, material};
    use crate::eval::BoardEvaluator;
    use tempo_core::Board;

    #[test]
    fn starting_material() {
        let board = Board::starting_position();
        // 8 pawns, 2 knights, 2 bishops, 2 rooks, queen, king.
        assert_eq!(material(&board.white_player()), 800 + 600 + 600 + 1000 + 900 + 10_000);
        assert_eq!(MaterialEvaluator.evaluate(&board, 0), 0);
    }

    #[test]
    fn extra_rook_counts() {
        let board: Board = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1".parse().unwrap();
        assert_eq!(MaterialEvaluator.evaluate(&board, 3), 500);
    }
}
