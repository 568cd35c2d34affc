//! Pseudo-legal move generation.
//!
//! Generators here ignore whether the mover's king ends up in check; the
//! legality filter in [`Player::make_move`](crate::Player::make_move)
//! executes each candidate and rejects the ones that do.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::geometry::{EIGHTH_FILE, FIRST_FILE};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::king::{KING_OFFSETS, castling_moves};
pub(crate) use self::knights::{KNIGHT_OFFSETS, knight_target};
pub(crate) use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Append every pseudo-legal move of `piece` on `board` to `moves`.
pub(crate) fn piece_moves(board: &Board, piece: Piece, moves: &mut Vec<Move>) {
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece, moves),
        PieceKind::Knight => gen_knight(board, piece, moves),
        PieceKind::Bishop => gen_slider(board, piece, &BISHOP_DIRECTIONS, moves),
        PieceKind::Rook => gen_slider(board, piece, &ROOK_DIRECTIONS, moves),
        PieceKind::Queen => gen_slider(board, piece, &QUEEN_DIRECTIONS, moves),
        PieceKind::King => gen_king(board, piece, moves),
    }
}

/// Return the square one king-step `offset` away from `from`.
///
/// Returns `None` when the step leaves the board or wraps from the a-file
/// to the h-file (or back). Shared by kings, sliders and pawn captures.
#[inline]
pub(crate) fn adjacent(from: Square, offset: i8) -> Option<Square> {
    let i = from.index();
    let wraps = (FIRST_FILE[i] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_FILE[i] && matches!(offset, -7 | 1 | 9));
    if wraps { None } else { from.offset(offset) }
}

/// Push a quiet move onto an empty `dest` or a capture onto an enemy piece.
#[inline]
fn push_step(board: &Board, piece: Piece, dest: Square, moves: &mut Vec<Move>) {
    match board.piece_on(dest) {
        None => moves.push(Move::Quiet { piece, dest }),
        Some(occupant) if occupant.color() != piece.color() => moves.push(Move::Capture {
            piece,
            dest,
            captured: occupant,
        }),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::adjacent;
    use crate::square::Square;

    #[test]
    fn adjacent_rejects_wraps() {
        assert_eq!(adjacent(Square::A4, -1), None);
        assert_eq!(adjacent(Square::A4, -9), None);
        assert_eq!(adjacent(Square::A4, 7), None);
        assert_eq!(adjacent(Square::H4, 1), None);
        assert_eq!(adjacent(Square::H4, -7), None);
        assert_eq!(adjacent(Square::H4, 9), None);
    }

    #[test]
    fn adjacent_allows_inward_steps() {
        assert_eq!(adjacent(Square::A4, 1), Some(Square::B4));
        assert_eq!(adjacent(Square::A4, -7), Some(Square::B5));
        assert_eq!(adjacent(Square::H4, -1), Some(Square::G4));
        assert_eq!(adjacent(Square::H4, 7), Some(Square::G3));
    }

    #[test]
    fn adjacent_rejects_off_board() {
        assert_eq!(adjacent(Square::E8, -8), None);
        assert_eq!(adjacent(Square::E1, 8), None);
    }
}
