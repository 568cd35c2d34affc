//! Square attack detection.
//!
//! Looks outward from the target square with each piece's movement pattern,
//! so it works on any board without consulting generated move lists. Used
//! for castling transit squares, where the king has not yet moved.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS, adjacent, knight_target,
};
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Return `true` if any piece of color `by` attacks `sq`.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let holds = |target: Option<Square>, kinds: &[PieceKind]| {
            target
                .and_then(|t| self.piece_on(t))
                .is_some_and(|p| p.color() == by && kinds.contains(&p.kind()))
        };

        // A `by` pawn attacks forward-diagonally, so look backward from `sq`.
        let d = by.direction();
        if holds(adjacent(sq, -7 * d), &[PieceKind::Pawn])
            || holds(adjacent(sq, -9 * d), &[PieceKind::Pawn])
        {
            return true;
        }

        if KNIGHT_OFFSETS.iter().any(|&o| holds(knight_target(sq, o), &[PieceKind::Knight])) {
            return true;
        }

        if KING_OFFSETS.iter().any(|&o| holds(adjacent(sq, o), &[PieceKind::King])) {
            return true;
        }

        self.ray_hits(sq, &ROOK_DIRECTIONS, by, PieceKind::Rook)
            || self.ray_hits(sq, &BISHOP_DIRECTIONS, by, PieceKind::Bishop)
    }

    /// Walk each ray from `sq` and report whether the first piece met is a
    /// `by`-colored `slider` or queen.
    fn ray_hits(&self, sq: Square, directions: &[i8], by: Color, slider: PieceKind) -> bool {
        for &direction in directions {
            let mut current = sq;
            while let Some(next) = adjacent(current, direction) {
                if let Some(piece) = self.piece_on(next) {
                    if piece.color() == by
                        && (piece.kind() == slider || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }
}
