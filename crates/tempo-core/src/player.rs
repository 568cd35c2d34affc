//! Per-side views of a board: legal moves, check status and move making.

use std::fmt;
use std::ptr;

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen;
use crate::piece::Piece;
use crate::square::Square;

/// Per-side data computed once when a board is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayerState {
    pub(crate) king: Piece,
    /// Pseudo-legal moves plus any castles.
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

impl PlayerState {
    /// A placeholder holding only the king, before moves are generated.
    pub(crate) fn pending(king: Piece) -> PlayerState {
        PlayerState { king, legal_moves: Vec::new(), in_check: false }
    }

    /// Generate both sides' moves and check status for `board`.
    ///
    /// Castling is generated last because it depends on the side not being
    /// in check, which in turn depends on the opponent's plain moves.
    pub(crate) fn evaluate(board: &Board) -> [PlayerState; Color::COUNT] {
        let mut moves = Color::ALL.map(|color| {
            let mut moves = Vec::with_capacity(48);
            for &piece in board.pieces(color) {
                movegen::piece_moves(board, piece, &mut moves);
            }
            moves
        });
        let kings = Color::ALL.map(|color| board.state(color).king);
        let in_check = Color::ALL.map(|color| {
            attacks_on(kings[color.index()].square(), &moves[(!color).index()])
        });
        for color in Color::ALL {
            let i = color.index();
            movegen::castling_moves(board, kings[i], in_check[i], &mut moves[i]);
        }

        let [white_moves, black_moves] = moves;
        [
            PlayerState { king: kings[0], legal_moves: white_moves, in_check: in_check[0] },
            PlayerState { king: kings[1], legal_moves: black_moves, in_check: in_check[1] },
        ]
    }
}

/// Return `true` if any move in `moves` lands on `square`.
fn attacks_on(square: Square, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.dest() == Some(square))
}

/// Outcome of [`Player::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    /// The move was played.
    Done,
    /// The move is not among the player's generated moves.
    IllegalMove,
    /// The move would leave the player's own king attacked.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// The result of attempting a move: the original board, the successor
/// (only when the move was played) and a status.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    from: &'a Board,
    to: Option<Board>,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// The board the move was attempted on.
    #[inline]
    pub fn from_board(&self) -> &'a Board {
        self.from
    }

    /// The board after the move, or the unchanged original if it was rejected.
    pub fn to_board(&self) -> &Board {
        self.to.as_ref().unwrap_or(self.from)
    }

    /// Take ownership of the board after the move, cloning the original if
    /// the move was rejected.
    pub fn into_board(self) -> Board {
        match self.to {
            Some(board) => board,
            None => self.from.clone(),
        }
    }
}

/// One side of a board.
///
/// A lightweight view: all data lives in the [`Board`], which computed this
/// side's moves and check status when it was built.
#[derive(Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
}

impl<'a> Player<'a> {
    #[inline]
    pub(crate) fn new(board: &'a Board, color: Color) -> Player<'a> {
        Player { board, color }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// This side's pieces still on the board.
    #[inline]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.pieces(self.color)
    }

    #[inline]
    pub fn king(&self) -> Piece {
        self.board.state(self.color).king
    }

    /// Pseudo-legal moves, castles included. Use [`Player::make_move`] to
    /// find out whether one is actually playable.
    #[inline]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.board.state(self.color).legal_moves
    }

    #[inline]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, !self.color)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.board.state(self.color).in_check
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    /// Return `true` if at least one generated move survives the legality filter.
    pub fn has_escape_moves(&self) -> bool {
        self.legal_moves().iter().any(|mv| self.make_move(mv).is_done())
    }

    #[inline]
    pub fn is_castled(&self) -> bool {
        self.board.has_castled(self.color)
    }

    /// Return `true` if `mv` is one of this player's generated moves.
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Attempt `mv`, returning the successor board when it is legal.
    ///
    /// Moves outside [`Player::legal_moves`] are rejected as
    /// [`MoveStatus::IllegalMove`]. Otherwise the move is executed and
    /// rejected as [`MoveStatus::LeavesPlayerInCheck`] if any of the
    /// opponent's replies would land on this player's king.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            trace!(player = %self, mv = %mv, "rejected move not in legal move list");
            return MoveTransition { from: self.board, to: None, status: MoveStatus::IllegalMove };
        }

        let next = mv.execute(self.board);
        let king_square = next.state(self.color).king.square();
        if attacks_on(king_square, next.current_player().legal_moves()) {
            trace!(player = %self, mv = %mv, "rejected move leaving king in check");
            return MoveTransition {
                from: self.board,
                to: None,
                status: MoveStatus::LeavesPlayerInCheck,
            };
        }

        MoveTransition { from: self.board, to: Some(next), status: MoveStatus::Done }
    }
}

impl PartialEq for Player<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && ptr::eq(self.board, other.board)
    }
}

impl Eq for Player<'_> {}

impl fmt::Display for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player({}, {:?})", self.color, self.board)
    }
}
