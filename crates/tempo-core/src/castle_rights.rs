//! Castling sides and the FEN castling-rights field.
//!
//! Castling eligibility on a [`Board`] is derived from the first-move flags
//! of the king and rook; [`CastleRights`] only exists to translate those
//! flags to and from FEN.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Square the castling rook starts on.
    pub const fn rook_start(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => Square::H1,
            (CastleSide::QueenSide, Color::White) => Square::A1,
            (CastleSide::KingSide, Color::Black) => Square::H8,
            (CastleSide::QueenSide, Color::Black) => Square::A8,
        }
    }

    /// Square the rook lands on.
    pub const fn rook_dest(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => Square::F1,
            (CastleSide::QueenSide, Color::White) => Square::D1,
            (CastleSide::KingSide, Color::Black) => Square::F8,
            (CastleSide::QueenSide, Color::Black) => Square::D8,
        }
    }

    /// Square the king lands on.
    pub const fn king_dest(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => Square::G1,
            (CastleSide::QueenSide, Color::White) => Square::C1,
            (CastleSide::KingSide, Color::Black) => Square::G8,
            (CastleSide::QueenSide, Color::Black) => Square::C8,
        }
    }

    /// Squares between king and rook, which must all be empty.
    pub const fn between(self, color: Color) -> &'static [Square] {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => &[Square::F1, Square::G1],
            (CastleSide::QueenSide, Color::White) => &[Square::D1, Square::C1, Square::B1],
            (CastleSide::KingSide, Color::Black) => &[Square::F8, Square::G8],
            (CastleSide::QueenSide, Color::Black) => &[Square::D8, Square::C8, Square::B8],
        }
    }

    /// Squares the king crosses or lands on, which must not be attacked.
    pub const fn transit(self, color: Color) -> &'static [Square] {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => &[Square::F1, Square::G1],
            (CastleSide::QueenSide, Color::White) => &[Square::D1, Square::C1],
            (CastleSide::KingSide, Color::Black) => &[Square::F8, Square::G8],
            (CastleSide::QueenSide, Color::Black) => &[Square::D8, Square::C8],
        }
    }
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Return the flag for a specific color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CastleRights(0b0001),
            (Color::White, CastleSide::QueenSide) => CastleRights(0b0010),
            (Color::Black, CastleSide::KingSide) => CastleRights(0b0100),
            (Color::Black, CastleSide::QueenSide) => CastleRights(0b1000),
        }
    }

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return new rights with `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Check whether a specific color and side can castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side).0) != 0
    }

    /// Return `true` if `color` keeps either castling right.
    #[inline]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastleSide::KingSide) || self.has(color, CastleSide::QueenSide)
    }

    /// Parse the FEN castling field ("KQkq", "-", ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            let flag = match c {
                'K' => Self::flag(Color::White, CastleSide::KingSide),
                'Q' => Self::flag(Color::White, CastleSide::QueenSide),
                'k' => Self::flag(Color::Black, CastleSide::KingSide),
                'q' => Self::flag(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            rights = rights.insert(flag);
        }
        Ok(rights)
    }

    /// Derive the rights implied by unmoved kings and rooks on `board`.
    pub fn from_board(board: &Board) -> CastleRights {
        let mut rights = CastleRights::NONE;
        for color in Color::ALL {
            let king_ready = board
                .piece_on(color.king_home())
                .is_some_and(|p| p.kind().is_king() && p.color() == color && p.is_first_move());
            if !king_ready {
                continue;
            }
            for side in CastleSide::ALL {
                let rook_ready = board.piece_on(side.rook_start(color)).is_some_and(|p| {
                    p.kind() == PieceKind::Rook && p.color() == color && p.is_first_move()
                });
                if rook_ready {
                    rights = rights.insert(Self::flag(color, side));
                }
            }
        }
        rights
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
