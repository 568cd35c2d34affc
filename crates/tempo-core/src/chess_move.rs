//! Moves and their execution into successor boards.

use std::fmt;

use crate::board::{Board, Builder};
use crate::castle_rights::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A candidate move on a specific board.
///
/// Every variant records the moving piece exactly as it stood before the
/// move, so two moves compare equal only when they were generated from the
/// same position state. [`Move::Null`] is the "no move" sentinel returned by
/// lookups that find nothing; it can never be executed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// A non-capturing move by any piece, including a single pawn push.
    Quiet { piece: Piece, dest: Square },
    /// A capture of the piece standing on `dest`.
    Capture { piece: Piece, dest: Square, captured: Piece },
    /// A pawn's two-square first advance.
    PawnJump { piece: Piece, dest: Square },
    /// A pawn capturing the en passant pawn beside it.
    EnPassant { piece: Piece, dest: Square, captured: Piece },
    /// King and rook castling together.
    Castle { king: Piece, dest: Square, side: CastleSide, rook: Piece, rook_dest: Square },
    /// A pawn move onto the last rank, replaced by `promoted` afterward.
    Promotion { base: Box<Move>, promoted: Piece },
    /// The sentinel.
    Null,
}

impl Move {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// The piece making the move, as it stood before moving.
    pub fn moved_piece(&self) -> Option<Piece> {
        match self {
            Move::Quiet { piece, .. }
            | Move::Capture { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::EnPassant { piece, .. } => Some(*piece),
            Move::Castle { king, .. } => Some(*king),
            Move::Promotion { base, .. } => base.moved_piece(),
            Move::Null => None,
        }
    }

    /// Origin square.
    pub fn source(&self) -> Option<Square> {
        self.moved_piece().map(Piece::square)
    }

    /// Destination square of the moving piece.
    pub fn dest(&self) -> Option<Square> {
        match self {
            Move::Quiet { dest, .. }
            | Move::Capture { dest, .. }
            | Move::PawnJump { dest, .. }
            | Move::EnPassant { dest, .. }
            | Move::Castle { dest, .. } => Some(*dest),
            Move::Promotion { base, .. } => base.dest(),
            Move::Null => None,
        }
    }

    /// The piece removed by this move, if any.
    pub fn captured_piece(&self) -> Option<Piece> {
        match self {
            Move::Capture { captured, .. } | Move::EnPassant { captured, .. } => Some(*captured),
            Move::Promotion { base, .. } => base.captured_piece(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    /// Format as UCI long algebraic notation ("e2e4", "e7e8q", "0000").
    pub fn to_uci(&self) -> String {
        match (self.source(), self.dest()) {
            (Some(from), Some(to)) if self.is_promotion() => format!("{from}{to}q"),
            (Some(from), Some(to)) => format!("{from}{to}"),
            _ => "0000".to_string(),
        }
    }

    /// Produce the board that results from playing this move on `board`.
    ///
    /// The move is not checked for legality; callers go through
    /// [`Player::make_move`](crate::Player::make_move) for that.
    ///
    /// # Panics
    ///
    /// Panics on [`Move::Null`], or if the move was generated for a different
    /// board and executing it removes a king.
    pub fn execute(&self, board: &Board) -> Board {
        let builder = match self {
            Move::Null => unreachable!("the null move cannot be executed"),
            Move::Promotion { base, promoted } => {
                let intermediate = base.execute(board);
                let mut builder = Builder::carrying_castled(&intermediate);
                for color in [promoted.color(), !promoted.color()] {
                    for &piece in intermediate.pieces(color) {
                        if piece.square() != promoted.square() {
                            builder.set_piece(piece);
                        }
                    }
                }
                builder.set_piece(*promoted).set_side_to_move(intermediate.side_to_move());
                builder
            }
            _ => self.successor(board),
        };
        builder
            .build()
            .unwrap_or_else(|err| panic!("executing {self} produced an invalid board: {err}"))
    }

    /// Builder for the position after a non-promotion move.
    fn successor(&self, board: &Board) -> Builder {
        let (piece, dest) = match (self.moved_piece(), self.dest()) {
            (Some(piece), Some(dest)) => (piece, dest),
            _ => unreachable!("the null move cannot be executed"),
        };
        let mover = piece.color();
        let captured = self.captured_piece();
        let castle_rook = match self {
            Move::Castle { rook, .. } => Some(*rook),
            _ => None,
        };

        let mut builder = Builder::carrying_castled(board);
        for &p in board.pieces(mover) {
            if p != piece && Some(p) != castle_rook {
                builder.set_piece(p);
            }
        }
        for &p in board.pieces(!mover) {
            if Some(p) != captured {
                builder.set_piece(p);
            }
        }

        let moved = piece.moved_to(dest);
        builder.set_piece(moved);
        match self {
            Move::PawnJump { .. } => {
                builder.set_en_passant_pawn(moved);
            }
            Move::Castle { rook, rook_dest, .. } => {
                builder
                    .set_piece(Piece::with_first_move(PieceKind::Rook, *rook_dest, rook.color(), false))
                    .set_castled(mover, true);
            }
            _ => {}
        }
        builder.set_side_to_move(!mover);
        builder
    }
}

/// Short algebraic-style text: "e4", "Nf3", "exd5", "Qxf7", "O-O", "e8=Q".
///
/// Disambiguation and check suffixes are not produced.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet { piece, dest } | Move::PawnJump { piece, dest } => {
                if piece.kind() == PieceKind::Pawn {
                    write!(f, "{dest}")
                } else {
                    write!(f, "{}{dest}", piece.kind())
                }
            }
            Move::Capture { piece, dest, .. } | Move::EnPassant { piece, dest, .. } => {
                if piece.kind() == PieceKind::Pawn {
                    let file = &piece.square().algebraic()[..1];
                    write!(f, "{file}x{dest}")
                } else {
                    write!(f, "{}x{dest}", piece.kind())
                }
            }
            Move::Castle { side: CastleSide::KingSide, .. } => write!(f, "O-O"),
            Move::Castle { side: CastleSide::QueenSide, .. } => write!(f, "O-O-O"),
            Move::Promotion { base, promoted } => write!(f, "{base}={}", promoted.kind()),
            Move::Null => write!(f, "--"),
        }
    }
}

/// Find the legal move on `board` that goes from `from` to `to`.
///
/// Searches every legal move of both sides and returns [`Move::Null`] when
/// none matches.
pub fn create_move(board: &Board, from: Square, to: Square) -> Move {
    board
        .all_legal_moves()
        .find(|mv| mv.source() == Some(from) && mv.dest() == Some(to))
        .cloned()
        .unwrap_or(Move::Null)
}

#[cfg(test)]
mod tests {
    use super::{Move, create_move};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn create_move_finds_legal_move() {
        let board = Board::starting_position();
        let mv = create_move(&board, Square::E2, Square::E4);
        assert!(matches!(mv, Move::PawnJump { .. }));
        assert_eq!(mv.to_uci(), "e2e4");
        assert_eq!(mv.to_string(), "e4");
    }

    #[test]
    fn create_move_returns_null_for_no_match() {
        let board = Board::starting_position();
        let mv = create_move(&board, Square::E2, Square::E6);
        assert!(mv.is_null());
        assert_eq!(mv.to_uci(), "0000");
        assert_eq!(mv.source(), None);
        assert_eq!(mv.dest(), None);
    }

    #[test]
    fn display_piece_moves() {
        let board = Board::starting_position();
        assert_eq!(create_move(&board, Square::G1, Square::F3).to_string(), "Nf3");
        assert_eq!(Move::Null.to_string(), "--");
    }

    #[test]
    fn quiet_move_execution() {
        let board = Board::starting_position();
        let next = create_move(&board, Square::G1, Square::F3).execute(&board);
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.piece_on(Square::G1), None);
        let knight = next.piece_on(Square::F3).unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert!(!knight.is_first_move());
        assert_eq!(next.en_passant_pawn(), None);
        assert_eq!(next.pieces(Color::White).len(), 16);
    }

    #[test]
    fn pawn_jump_sets_en_passant_pawn() {
        let board = Board::starting_position();
        let next = create_move(&board, Square::D2, Square::D4).execute(&board);
        let ep = next.en_passant_pawn().unwrap();
        assert_eq!(ep.square(), Square::D4);
        assert_eq!(ep.color(), Color::White);

        let after = create_move(&next, Square::G8, Square::F6).execute(&next);
        assert_eq!(after.en_passant_pawn(), None);
    }

    #[test]
    fn capture_removes_piece() {
        let board: Board = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = create_move(&board, Square::E4, Square::D5);
        assert!(mv.is_capture());
        assert_eq!(mv.to_string(), "exd5");
        let next = mv.execute(&board);
        assert_eq!(next.pieces(Color::Black).len(), 1);
        assert_eq!(next.piece_on(Square::D5).map(|p| p.color()), Some(Color::White));
    }

    #[test]
    fn en_passant_removes_passed_pawn() {
        let board: Board = "4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1".parse().unwrap();
        let mv = create_move(&board, Square::D5, Square::E6);
        assert!(matches!(mv, Move::EnPassant { .. }));
        let next = mv.execute(&board);
        assert_eq!(next.piece_on(Square::E5), None);
        assert_eq!(next.piece_on(Square::E6).map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(next.pieces(Color::Black).len(), 1);
    }

    #[test]
    fn castle_moves_king_and_rook() {
        let board: Board = "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        let mv = create_move(&board, Square::E1, Square::G1);
        assert!(mv.is_castle());
        assert_eq!(mv.to_string(), "O-O");
        let next = mv.execute(&board);
        assert_eq!(next.piece_on(Square::G1).map(|p| p.kind()), Some(PieceKind::King));
        let rook = next.piece_on(Square::F1).unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert!(!rook.is_first_move());
        assert_eq!(next.piece_on(Square::H1), None);
        assert!(next.has_castled(Color::White));
        assert!(!next.has_castled(Color::Black));
    }

    #[test]
    fn promotion_replaces_pawn_with_queen() {
        let board: Board = "4k3/1P6/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = create_move(&board, Square::B7, Square::B8);
        assert_eq!(mv.to_string(), "b8=Q");
        let next = mv.execute(&board);
        let queen = next.piece_on(Square::B8).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.color(), Color::White);
        assert_eq!(next.pieces(Color::White).len(), 2);
        assert_eq!(next.side_to_move(), Color::Black);
    }

    #[test]
    fn capture_promotion() {
        let board: Board = "2r1k3/1P6/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let mv = create_move(&board, Square::B7, Square::C8);
        assert!(mv.is_promotion());
        assert!(mv.is_capture());
        assert_eq!(mv.to_string(), "bxc8=Q");
        let next = mv.execute(&board);
        assert_eq!(next.pieces(Color::Black).len(), 1);
        assert_eq!(next.piece_on(Square::C8).map(|p| p.kind()), Some(PieceKind::Queen));
    }

    #[test]
    #[should_panic]
    fn executing_null_move_panics() {
        let board = Board::starting_position();
        let _ = Move::Null.execute(&board);
    }
}
