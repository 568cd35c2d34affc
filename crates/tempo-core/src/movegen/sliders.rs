//! Bishop, rook and queen move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;

use super::adjacent;

pub(crate) const BISHOP_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];
pub(crate) const ROOK_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];
pub(crate) const QUEEN_DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Generate pseudo-legal moves along each ray in `directions`.
///
/// A ray stops at the first occupied square, which is a capture target when
/// it holds an enemy piece.
pub(super) fn gen_slider(board: &Board, piece: Piece, directions: &[i8], moves: &mut Vec<Move>) {
    for &direction in directions {
        let mut current = piece.square();
        while let Some(next) = adjacent(current, direction) {
            match board.piece_on(next) {
                None => moves.push(Move::Quiet { piece, dest: next }),
                Some(occupant) => {
                    if occupant.color() != piece.color() {
                        moves.push(Move::Capture { piece, dest: next, captured: occupant });
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
