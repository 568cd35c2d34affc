//! FEN string parsing and serialization for [`Board`].
//!
//! Boards track first-move flags rather than castling rights, so parsing
//! derives the flags from piece placement and the castling field, and
//! writing derives the castling field back from the flags.

use std::fmt;
use std::str::FromStr;

use crate::board::{BACK_RANK, Board};
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Return `true` if a `kind` of `color` on `sq` should count as unmoved.
fn starts_unmoved(kind: PieceKind, color: Color, sq: Square, rights: CastleRights) -> bool {
    let home_rank = if color.is_white() { 1 } else { 8 };
    match kind {
        PieceKind::Pawn => color.is_pawn_start_square(sq),
        PieceKind::King => sq == color.king_home() && rights.has_any(color),
        PieceKind::Rook => CastleSide::ALL
            .iter()
            .any(|&side| sq == side.rook_start(color) && rights.has(color, side)),
        _ => sq.rank() == home_rank && BACK_RANK[sq.file_index() as usize] == kind,
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidColor { found: other.to_string() }),
        };

        let rights = CastleRights::from_fen(fields[2])?;

        // Placement is parsed after the castling field, which decides
        // whether kings and rooks count as unmoved.
        let mut builder = Board::builder();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let mut file_index: usize = 0;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    file_index += digit as usize;
                    continue;
                }

                let kind = PieceKind::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
                if file_index >= 8 {
                    return Err(FenError::BadRankLength { rank_index, length: file_index + 1 });
                }
                let sq = Square::from_index((rank_index * 8 + file_index) as u8)
                    .ok_or(FenError::BadRankLength { rank_index, length: file_index + 1 })?;
                let first_move = starts_unmoved(kind, color, sq, rights);
                builder.set_piece(Piece::with_first_move(kind, sq, color, first_move));
                file_index += 1;
            }
            if file_index != 8 {
                return Err(FenError::BadRankLength { rank_index, length: file_index });
            }
        }
        builder.set_side_to_move(side_to_move);

        // The target square sits behind the pawn that just advanced two squares.
        if fields[3] != "-" {
            let invalid = || FenError::InvalidEnPassant { found: fields[3].to_string() };
            let target = Square::from_algebraic(fields[3]).ok_or_else(invalid)?;
            let pawn_square = target.offset(-8 * side_to_move.direction()).ok_or_else(invalid)?;
            let pawn = builder
                .piece_on(pawn_square)
                .filter(|p| p.kind() == PieceKind::Pawn && p.color() != side_to_move)
                .ok_or_else(invalid)?;
            builder.set_en_passant_pawn(pawn);
        }

        for (index, field) in [(4, "halfmove clock"), (5, "fullmove number")] {
            fields[index].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
                field,
                found: fields[index].to_string(),
            })?;
        }

        Ok(builder.build()?)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, tiles) in self.tiles().chunks(8).enumerate() {
            let mut empty_count = 0u8;
            for tile in tiles {
                match tile.piece() {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }

        let side = if self.side_to_move().is_white() { "w" } else { "b" };
        write!(f, " {side} {}", CastleRights::from_board(self))?;

        match self
            .en_passant_pawn()
            .and_then(|pawn| pawn.square().offset(-8 * pawn.color().direction()))
        {
            Some(target) => write!(f, " {target}")?,
            None => write!(f, " -")?,
        }

        write!(f, " 0 1")
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::FenError;
    use crate::square::Square;

    #[test]
    fn parse_starting_fen_matches_starting_position() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn roundtrip() {
        for fen in [
            STARTING_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b Kq e3 0 1",
        ] {
            let board: Board = fen.parse().unwrap();
            assert_eq!(board.to_string(), fen);
        }
    }

    #[test]
    fn first_move_flags_follow_rights() {
        let board: Board = "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1".parse().unwrap();
        assert!(board.piece_on(Square::H1).unwrap().is_first_move());
        assert!(!board.piece_on(Square::A1).unwrap().is_first_move());
        assert!(board.piece_on(Square::E1).unwrap().is_first_move());
        assert!(board.piece_on(Square::A8).unwrap().is_first_move());
        assert!(!board.piece_on(Square::H8).unwrap().is_first_move());
    }

    #[test]
    fn en_passant_pawn_from_target() {
        let board: Board = "4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 1".parse().unwrap();
        let pawn = board.en_passant_pawn().unwrap();
        assert_eq!(pawn.square(), Square::E5);
        assert_eq!(pawn.color(), Color::Black);
    }

    #[test]
    fn en_passant_without_pawn_rejected() {
        let result = "4k3/8/8/3P4/8/8/8/4K3 w - e6 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn wrong_field_count() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -".parse::<Board>();
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 4 }));
    }

    #[test]
    fn wrong_rank_count() {
        let result = "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert_eq!(result, Err(FenError::WrongRankCount { found: 7 }));
    }

    #[test]
    fn bad_rank_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 1, .. })));
    }

    #[test]
    fn invalid_piece_char() {
        let result = "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Board>();
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'x' }));
    }

    #[test]
    fn invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn invalid_move_counter() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidMoveCounter { .. })));
    }

    #[test]
    fn missing_king_rejected() {
        let result = "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>();
        assert!(matches!(result, Err(FenError::InvalidBoard { .. })));
    }
}
