//! Pieces as immutable values placed on a square.

use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece standing on a square.
///
/// Two pieces are equal when kind, square, color and first-move flag all
/// match. Moving a piece never mutates it; [`Piece::moved_to`] returns the
/// piece's post-move counterpart instead.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    square: Square,
    color: Color,
    first_move: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, square: Square, color: Color) -> Piece {
        Piece { kind, square, color, first_move: true }
    }

    /// Create a piece with an explicit first-move flag.
    #[inline]
    pub const fn with_first_move(
        kind: PieceKind,
        square: Square,
        color: Color,
        first_move: bool,
    ) -> Piece {
        Piece { kind, square, color, first_move }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return `true` until the piece has made its first move.
    #[inline]
    pub const fn is_first_move(self) -> bool {
        self.first_move
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// The same piece after moving to `dest`.
    #[inline]
    pub const fn moved_to(self, dest: Square) -> Piece {
        Piece { square: dest, first_move: false, ..self }
    }

    /// Generate this piece's pseudo-legal moves on `board`.
    ///
    /// Moves that would leave the mover's own king in check are included;
    /// [`Player::make_move`](crate::Player::make_move) filters those out.
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        let mut moves = Vec::new();
        movegen::piece_moves(board, *self, &mut moves);
        moves
    }

    /// Return the FEN character (uppercase for White).
    pub const fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({}@{}", self.fen_char(), self.square)?;
        if self.first_move {
            write!(f, " first")?;
        }
        write!(f, ")")
    }
}
