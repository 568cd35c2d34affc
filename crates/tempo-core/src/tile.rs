//! The 64 tiles that make up a board snapshot.

use std::fmt;

use crate::piece::Piece;
use crate::square::Square;

/// A single square's content: empty, or holding one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty(Square),
    Occupied(Square, Piece),
}

/// One shared empty tile per square.
const EMPTY_TILES: [Tile; 64] = {
    let mut tiles = [Tile::Empty(Square::A8); 64];
    let mut i = 0;
    while i < 64 {
        if let Some(sq) = Square::from_index(i as u8) {
            tiles[i] = Tile::Empty(sq);
        }
        i += 1;
    }
    tiles
};

impl Tile {
    /// Create the tile for `square`, occupied when `piece` is present.
    #[inline]
    pub fn new(square: Square, piece: Option<Piece>) -> Tile {
        match piece {
            Some(piece) => Tile::Occupied(square, piece),
            None => EMPTY_TILES[square.index()],
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        match *self {
            Tile::Empty(sq) | Tile::Occupied(sq, _) => sq,
        }
    }

    #[inline]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(..))
    }

    #[inline]
    pub const fn piece(&self) -> Option<Piece> {
        match *self {
            Tile::Empty(_) => None,
            Tile::Occupied(_, piece) => Some(piece),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => write!(f, "."),
            Tile::Occupied(_, piece) => write!(f, "{piece}"),
        }
    }
}
