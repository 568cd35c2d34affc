//! Immutable board snapshots and the builder that produces them.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::player::{Player, PlayerState};
use crate::square::Square;
use crate::tile::Tile;

/// Piece kinds on the back rank in the standard starting position, a-file first.
pub(crate) const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A complete, immutable chess position.
///
/// Boards are only created through [`Builder::build`] (or helpers built on
/// it), which also computes both sides' pseudo-legal move lists and check
/// status. Playing a move never modifies a board; [`Move::execute`] returns
/// a new one.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; Square::COUNT],
    /// Active pieces per color, in square order.
    pieces: [Vec<Piece>; Color::COUNT],
    players: [PlayerState; Color::COUNT],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    castled: [bool; Color::COUNT],
}

impl Board {
    /// Return the standard starting position with White to move.
    pub fn starting_position() -> Board {
        let mut builder = Builder::new();
        for sq in Square::all() {
            let kind = BACK_RANK[sq.file_index() as usize];
            let piece = match sq.rank() {
                8 => Some(Piece::new(kind, sq, Color::Black)),
                7 => Some(Piece::new(PieceKind::Pawn, sq, Color::Black)),
                2 => Some(Piece::new(PieceKind::Pawn, sq, Color::White)),
                1 => Some(Piece::new(kind, sq, Color::White)),
                _ => None,
            };
            if let Some(piece) = piece {
                builder.set_piece(piece);
            }
        }
        builder.set_side_to_move(Color::White);
        builder.build().expect("starting position has one king per side")
    }

    /// Start an empty builder.
    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }

    #[inline]
    pub fn tile(&self, sq: Square) -> &Tile {
        &self.tiles[sq.index()]
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.tiles[sq.index()].piece()
    }

    /// All 64 tiles in square order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The active pieces of `color`, in square order.
    #[inline]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        &self.pieces[color.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The pawn that just made a two-square advance, capturable en passant.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    /// Return `true` if `color` has castled earlier in the game.
    #[inline]
    pub fn has_castled(&self, color: Color) -> bool {
        self.castled[color.index()]
    }

    #[inline]
    pub fn player(&self, color: Color) -> Player<'_> {
        Player::new(self, color)
    }

    #[inline]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Color::White)
    }

    #[inline]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Color::Black)
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Every generated move of both sides, White's first.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.players[Color::White.index()]
            .legal_moves
            .iter()
            .chain(self.players[Color::Black.index()].legal_moves.iter())
    }

    #[inline]
    pub(crate) fn state(&self, color: Color) -> &PlayerState {
        &self.players[color.index()]
    }

    /// Return a wrapper that displays the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, tiles) in self.0.tiles.chunks(8).enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (file, tile) in tiles.iter().enumerate() {
                if file < 7 {
                    write!(f, "{tile} ")?;
                } else {
                    write!(f, "{tile}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Accumulates a position and materializes it into a [`Board`].
#[derive(Debug, Clone)]
pub struct Builder {
    placement: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
    castled: [bool; Color::COUNT],
}

impl Builder {
    /// An empty builder with White to move.
    pub fn new() -> Builder {
        Builder {
            placement: [None; Square::COUNT],
            side_to_move: Color::White,
            en_passant_pawn: None,
            castled: [false; Color::COUNT],
        }
    }

    /// An empty builder that keeps `board`'s castled flags.
    pub(crate) fn carrying_castled(board: &Board) -> Builder {
        Builder { castled: board.castled, ..Builder::new() }
    }

    /// Place `piece` on its square, replacing whatever was there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Builder {
        self.placement[piece.square().index()] = Some(piece);
        self
    }

    /// The piece placed on `sq` so far.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.placement[sq.index()]
    }

    pub fn set_side_to_move(&mut self, color: Color) -> &mut Builder {
        self.side_to_move = color;
        self
    }

    /// Mark `pawn` as capturable en passant. Ignored by [`Builder::build`]
    /// unless that exact pawn is placed on the board.
    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Builder {
        self.en_passant_pawn = Some(pawn);
        self
    }

    pub fn set_castled(&mut self, color: Color, castled: bool) -> &mut Builder {
        self.castled[color.index()] = castled;
        self
    }

    /// Materialize the board, computing both players' move lists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidKingCount`] unless each side has exactly
    /// one king.
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut tiles = [Tile::new(Square::A8, None); Square::COUNT];
        let mut pieces: [Vec<Piece>; Color::COUNT] = [Vec::with_capacity(16), Vec::with_capacity(16)];
        for sq in Square::all() {
            let piece = self.placement[sq.index()];
            tiles[sq.index()] = Tile::new(sq, piece);
            if let Some(piece) = piece {
                pieces[piece.color().index()].push(piece);
            }
        }

        let kings = [
            single_king(&pieces[Color::White.index()], Color::White)?,
            single_king(&pieces[Color::Black.index()], Color::Black)?,
        ];
        let en_passant_pawn = self.en_passant_pawn.filter(|pawn| {
            pawn.kind() == PieceKind::Pawn && self.placement[pawn.square().index()] == Some(*pawn)
        });

        let mut board = Board {
            tiles,
            pieces,
            players: kings.map(PlayerState::pending),
            side_to_move: self.side_to_move,
            en_passant_pawn,
            castled: self.castled,
        };
        board.players = PlayerState::evaluate(&board);
        Ok(board)
    }
}

impl Default for Builder {
    fn default() -> Builder {
        Builder::new()
    }
}

fn single_king(pieces: &[Piece], color: Color) -> Result<Piece, BoardError> {
    let mut kings = pieces.iter().filter(|p| p.kind().is_king());
    match (kings.next(), kings.count()) {
        (Some(&king), 0) => Ok(king),
        (None, _) => Err(BoardError::InvalidKingCount { color, count: 0 }),
        (Some(_), rest) => Err(BoardError::InvalidKingCount { color, count: rest + 1 }),
    }
}
