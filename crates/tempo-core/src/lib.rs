//! Core chess types: board snapshots, pieces, move generation and game rules.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
pub mod geometry;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod player;
mod square;
mod tile;

pub use board::{Board, Builder, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, create_move};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use player::{MoveStatus, MoveTransition, Player};
pub use square::Square;
pub use tile::Tile;
