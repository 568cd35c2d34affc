//! Board squares, indexed row-major from a8 (0) to h1 (63).

use std::fmt;

use crate::geometry::{self, ALGEBRAIC_NOTATION, NUM_SQUARES};

/// A square on the chess board.
///
/// Index = (8 - rank) * 8 + file, so A8 = 0, H8 = 7, A1 = 56, H1 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = NUM_SQUARES;

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        geometry::algebraic_to_square(s).map(|index| Square(index as u8))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the file index, 0 for the a-file through 7 for the h-file.
    #[inline]
    pub const fn file_index(self) -> u8 {
        self.0 % 8
    }

    /// Return the chess rank (1..=8) of this square.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.0 / 8
    }

    /// Return the square `delta` indices away, if it lies on the board.
    ///
    /// This only checks the index range; callers are responsible for
    /// rejecting offsets that wrap around a board edge.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        let target = self.0 as i32 + delta as i32;
        if geometry::is_valid_square(target) {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Return the algebraic name of this square.
    #[inline]
    pub fn algebraic(self) -> &'static str {
        ALGEBRAIC_NOTATION[self.index()]
    }

    /// Iterate over all 64 squares in index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A8: Square = Square(0);
    pub const B8: Square = Square(1);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A7: Square = Square(8);
    pub const B7: Square = Square(9);
    pub const C7: Square = Square(10);
    pub const D7: Square = Square(11);
    pub const E7: Square = Square(12);
    pub const F7: Square = Square(13);
    pub const G7: Square = Square(14);
    pub const H7: Square = Square(15);
    pub const A6: Square = Square(16);
    pub const B6: Square = Square(17);
    pub const C6: Square = Square(18);
    pub const D6: Square = Square(19);
    pub const E6: Square = Square(20);
    pub const F6: Square = Square(21);
    pub const G6: Square = Square(22);
    pub const H6: Square = Square(23);
    pub const A5: Square = Square(24);
    pub const B5: Square = Square(25);
    pub const C5: Square = Square(26);
    pub const D5: Square = Square(27);
    pub const E5: Square = Square(28);
    pub const F5: Square = Square(29);
    pub const G5: Square = Square(30);
    pub const H5: Square = Square(31);
    pub const A4: Square = Square(32);
    pub const B4: Square = Square(33);
    pub const C4: Square = Square(34);
    pub const D4: Square = Square(35);
    pub const E4: Square = Square(36);
    pub const F4: Square = Square(37);
    pub const G4: Square = Square(38);
    pub const H4: Square = Square(39);
    pub const A3: Square = Square(40);
    pub const B3: Square = Square(41);
    pub const C3: Square = Square(42);
    pub const D3: Square = Square(43);
    pub const E3: Square = Square(44);
    pub const F3: Square = Square(45);
    pub const G3: Square = Square(46);
    pub const H3: Square = Square(47);
    pub const A2: Square = Square(48);
    pub const B2: Square = Square(49);
    pub const C2: Square = Square(50);
    pub const D2: Square = Square(51);
    pub const E2: Square = Square(52);
    pub const F2: Square = Square(53);
    pub const G2: Square = Square(54);
    pub const H2: Square = Square(55);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algebraic())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn from_index_valid() {
        for i in 0u8..64 {
            assert!(Square::from_index(i).is_some());
        }
    }

    #[test]
    fn from_index_invalid() {
        assert!(Square::from_index(64).is_none());
        assert!(Square::from_index(255).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a8"), Some(Square::A8));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::H1));
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{}", Square::A1), "a1");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn algebraic_roundtrip_all_squares() {
        for sq in Square::all() {
            assert_eq!(Square::from_algebraic(&sq.to_string()), Some(sq));
        }
    }

    #[test]
    fn named_constants() {
        assert_eq!(Square::A8.index(), 0);
        assert_eq!(Square::E8.index(), 4);
        assert_eq!(Square::E4.index(), 36);
        assert_eq!(Square::E1.index(), 60);
        assert_eq!(Square::H1.index(), 63);
    }

    #[test]
    fn file_and_rank() {
        assert_eq!(Square::A8.file_index(), 0);
        assert_eq!(Square::A8.rank(), 8);
        assert_eq!(Square::H1.file_index(), 7);
        assert_eq!(Square::H1.rank(), 1);
        assert_eq!(Square::E4.rank(), 4);
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E2.offset(-16), Some(Square::E4));
        assert_eq!(Square::A8.offset(-1), None);
        assert_eq!(Square::H1.offset(1), None);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
