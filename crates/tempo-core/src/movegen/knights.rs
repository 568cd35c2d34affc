//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::geometry::{EIGHTH_FILE, FIRST_FILE, SECOND_FILE, SEVENTH_FILE};
use crate::piece::Piece;
use crate::square::Square;

use super::push_step;

/// The eight knight jumps, in ascending order.
pub(crate) const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

/// Return `true` if jumping by `offset` from `from` would wrap around an edge.
#[inline]
const fn is_excluded(from: Square, offset: i8) -> bool {
    let i = from.index();
    (FIRST_FILE[i] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_FILE[i] && matches!(offset, -10 | 6))
        || (SEVENTH_FILE[i] && matches!(offset, -6 | 10))
        || (EIGHTH_FILE[i] && matches!(offset, -15 | -6 | 10 | 17))
}

/// Return the square a knight on `from` reaches with `offset`, if any.
#[inline]
pub(crate) fn knight_target(from: Square, offset: i8) -> Option<Square> {
    if is_excluded(from, offset) { None } else { from.offset(offset) }
}

/// Generate pseudo-legal knight moves.
pub(super) fn gen_knight(board: &Board, knight: Piece, moves: &mut Vec<Move>) {
    for offset in KNIGHT_OFFSETS {
        if let Some(dest) = knight_target(knight.square(), offset) {
            push_step(board, knight, dest, moves);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::knight_target;
    use super::KNIGHT_OFFSETS;
    use crate::square::Square;

    fn targets(from: Square) -> Vec<Square> {
        KNIGHT_OFFSETS.iter().filter_map(|&o| knight_target(from, o)).collect()
    }

    #[test]
    fn corner_knight_has_two_targets() {
        let mut t = targets(Square::A1);
        t.sort();
        assert_eq!(t, vec![Square::B3, Square::C2]);
    }

    #[test]
    fn b_file_knight_does_not_wrap() {
        let t = targets(Square::B4);
        assert_eq!(t.len(), 6);
        assert!(!t.contains(&Square::H4));
    }

    #[test]
    fn g_file_knight_does_not_wrap() {
        let t = targets(Square::G5);
        assert_eq!(t.len(), 6);
        assert!(t.contains(&Square::E4));
        assert!(t.contains(&Square::H7));
    }

    #[test]
    fn centre_knight_has_eight_targets() {
        assert_eq!(targets(Square::D4).len(), 8);
    }
}
