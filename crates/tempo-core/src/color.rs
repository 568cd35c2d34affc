//! Chess piece colors.

use std::fmt;
use std::ops::Not;

use crate::geometry::{EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};
use crate::square::Square;

/// A chess piece color: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Signed index step of a forward pawn move.
    ///
    /// White advances toward a8 (decreasing indices), Black toward h1.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Return `true` if a pawn of this color promotes on `sq`.
    #[inline]
    pub const fn is_promotion_square(self, sq: Square) -> bool {
        match self {
            Color::White => EIGHTH_RANK[sq.index()],
            Color::Black => FIRST_RANK[sq.index()],
        }
    }

    /// Return `true` if `sq` is on the rank this color's pawns start from.
    #[inline]
    pub const fn is_pawn_start_square(self, sq: Square) -> bool {
        match self {
            Color::White => SECOND_RANK[sq.index()],
            Color::Black => SEVENTH_RANK[sq.index()],
        }
    }

    /// Return the square this color's king starts on.
    #[inline]
    pub const fn king_home(self) -> Square {
        match self {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
