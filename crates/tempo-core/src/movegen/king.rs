//! King move generation, including castling.

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;

use super::{adjacent, push_step};

/// The eight king steps, in ascending order.
pub(crate) const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Generate pseudo-legal single-step king moves. Castling is added separately
/// once the side's check status is known.
pub(super) fn gen_king(board: &Board, king: Piece, moves: &mut Vec<Move>) {
    for offset in KING_OFFSETS {
        if let Some(dest) = adjacent(king.square(), offset) {
            push_step(board, king, dest, moves);
        }
    }
}

/// Append the castling moves available to `king`.
///
/// Requires an unmoved king on its home square that is not in check, an
/// unmoved friendly rook on the corner, empty squares between them and no
/// enemy attack on the squares the king crosses or lands on.
pub(crate) fn castling_moves(board: &Board, king: Piece, in_check: bool, moves: &mut Vec<Move>) {
    let color = king.color();
    if in_check || !king.is_first_move() || king.square() != color.king_home() {
        return;
    }

    for side in CastleSide::ALL {
        if side.between(color).iter().any(|&sq| board.tile(sq).is_occupied()) {
            continue;
        }
        let Some(rook) = board.piece_on(side.rook_start(color)) else {
            continue;
        };
        if !rook.kind().is_rook() || rook.color() != color || !rook.is_first_move() {
            continue;
        }
        if side.transit(color).iter().any(|&sq| board.is_square_attacked(sq, !color)) {
            continue;
        }
        moves.push(Move::Castle {
            king,
            dest: side.king_dest(color),
            side,
            rook,
            rook_dest: side.rook_dest(color),
        });
    }
}
