//! Pawn move generation: pushes, double pushes, captures, en passant and
//! promotion.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::adjacent;

/// Wrap `mv` in a queen promotion when it lands on the last rank.
fn promote_if_last_rank(pawn: Piece, mv: Move, moves: &mut Vec<Move>) {
    match mv.dest() {
        Some(dest) if pawn.color().is_promotion_square(dest) => moves.push(Move::Promotion {
            base: Box::new(mv),
            promoted: Piece::with_first_move(PieceKind::Queen, dest, pawn.color(), false),
        }),
        _ => moves.push(mv),
    }
}

/// Generate pseudo-legal moves for a single pawn.
pub(super) fn gen_pawn(board: &Board, pawn: Piece, moves: &mut Vec<Move>) {
    let color = pawn.color();
    let direction = color.direction();
    let from = pawn.square();

    if let Some(dest) = from.offset(8 * direction) {
        if board.piece_on(dest).is_none() {
            promote_if_last_rank(pawn, Move::Quiet { piece: pawn, dest }, moves);

            if pawn.is_first_move() && color.is_pawn_start_square(from) {
                if let Some(jump) = from.offset(16 * direction) {
                    if board.piece_on(jump).is_none() {
                        moves.push(Move::PawnJump { piece: pawn, dest: jump });
                    }
                }
            }
        }
    }

    // For White, 7 * direction captures toward the h-file and 9 * direction toward the a-file.
    for offset in [7 * direction, 9 * direction] {
        let Some(dest) = adjacent(from, offset) else {
            continue;
        };
        match board.piece_on(dest) {
            Some(target) if target.color() != color => {
                promote_if_last_rank(pawn, Move::Capture { piece: pawn, dest, captured: target }, moves);
            }
            Some(_) => {}
            None => {
                let Some(ep) = board.en_passant_pawn() else {
                    continue;
                };
                if ep.color() != color && dest.offset(-8 * direction) == Some(ep.square()) {
                    moves.push(Move::EnPassant { piece: pawn, dest, captured: ep });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::square::Square;

    fn moves_from(board: &Board, sq: Square) -> Vec<Move> {
        board.piece_on(sq).expect("piece on square").legal_moves(board)
    }

    #[test]
    fn start_rank_pawn_pushes_and_jumps() {
        let board = Board::starting_position();
        let moves = moves_from(&board, Square::E2);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| matches!(m, Move::Quiet { dest: Square::E3, .. })));
        assert!(moves.iter().any(|m| matches!(m, Move::PawnJump { dest: Square::E4, .. })));
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board: Board = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1".parse().unwrap();
        assert!(moves_from(&board, Square::E2).is_empty());
    }

    #[test]
    fn edge_pawn_captures_do_not_wrap() {
        let board: Board = "4k3/8/8/8/p6p/1P6/P6P/4K3 w - - 0 1".parse().unwrap();
        let a2 = moves_from(&board, Square::A2);
        assert!(a2.iter().all(|m| !m.is_capture()));
        let h2 = moves_from(&board, Square::H2);
        assert!(h2.iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn black_pawn_captures_toward_white() {
        let board: Board = "4k3/8/8/3p4/2P1P3/8/8/4K3 b - - 0 1".parse().unwrap();
        let captures: Vec<_> =
            moves_from(&board, Square::D5).into_iter().filter(Move::is_capture).collect();
        assert_eq!(captures.len(), 2);
    }

    #[test]
    fn en_passant_available_after_jump() {
        let board: Board = "4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1".parse().unwrap();
        let moves = moves_from(&board, Square::D5);
        let ep = moves.iter().find(|m| matches!(m, Move::EnPassant { .. })).unwrap();
        assert_eq!(ep.dest(), Some(Square::E6));
        assert_eq!(ep.captured_piece().map(|p| p.square()), Some(Square::E5));
    }

    #[test]
    fn last_rank_push_promotes_to_queen() {
        let board: Board = "4k3/1P6/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = moves_from(&board, Square::B7);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_promotion());
        assert_eq!(moves[0].to_uci(), "b7b8q");
    }
}
