//! Precomputed board geometry: file/rank membership tables and algebraic names.
//!
//! Squares are indexed row-major from the top-left as seen by White, so
//! index 0 is a8 and index 63 is h1. The file tables let move generators
//! reject offsets that would wrap around the left or right edge.

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Number of squares in a single row.
pub const SQUARES_PER_ROW: usize = 8;

const fn file_table(file: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let mut sq = file;
    while sq < NUM_SQUARES {
        table[sq] = true;
        sq += SQUARES_PER_ROW;
    }
    table
}

/// Build the membership table for the given chess rank (1..=8).
const fn rank_table(rank: usize) -> [bool; NUM_SQUARES] {
    let mut table = [false; NUM_SQUARES];
    let start = (8 - rank) * SQUARES_PER_ROW;
    let mut sq = start;
    while sq < start + SQUARES_PER_ROW {
        table[sq] = true;
        sq += 1;
    }
    table
}

/// Squares on the a-file.
pub const FIRST_FILE: [bool; NUM_SQUARES] = file_table(0);
/// Squares on the b-file.
pub const SECOND_FILE: [bool; NUM_SQUARES] = file_table(1);
/// Squares on the g-file.
pub const SEVENTH_FILE: [bool; NUM_SQUARES] = file_table(6);
/// Squares on the h-file.
pub const EIGHTH_FILE: [bool; NUM_SQUARES] = file_table(7);

pub const FIRST_RANK: [bool; NUM_SQUARES] = rank_table(1);
pub const SECOND_RANK: [bool; NUM_SQUARES] = rank_table(2);
pub const THIRD_RANK: [bool; NUM_SQUARES] = rank_table(3);
pub const FOURTH_RANK: [bool; NUM_SQUARES] = rank_table(4);
pub const FIFTH_RANK: [bool; NUM_SQUARES] = rank_table(5);
pub const SIXTH_RANK: [bool; NUM_SQUARES] = rank_table(6);
pub const SEVENTH_RANK: [bool; NUM_SQUARES] = rank_table(7);
pub const EIGHTH_RANK: [bool; NUM_SQUARES] = rank_table(8);

/// Algebraic name of every square, in index order.
pub const ALGEBRAIC_NOTATION: [&str; NUM_SQUARES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

/// Return `true` if `index` names a square on the board.
#[inline]
pub const fn is_valid_square(index: i32) -> bool {
    index >= 0 && index < NUM_SQUARES as i32
}

/// Return the algebraic name of a square index.
///
/// # Panics
///
/// Panics if `index` is not below 64.
#[inline]
pub fn square_to_algebraic(index: usize) -> &'static str {
    ALGEBRAIC_NOTATION[index]
}

/// Return the square index named by `name` (e.g. "e4"), if any.
pub fn algebraic_to_square(name: &str) -> Option<usize> {
    ALGEBRAIC_NOTATION.iter().position(|&n| n == name)
}
