//! Hole numbering for the 15-hole triangular board.
//!
//! ```text
//!         (14)                E
//!       (13)(12)             D C
//!     (11)(10)( 9)          B A 9
//!   ( 8)( 7)( 6)( 5)       8 7 6 5
//! ( 4)( 3)( 2)( 1)( 0)    4 3 2 1 0
//! ```
//!
//! Every hole also has a single-character name (right-hand diagram) so that
//! move sequences render with a fixed width.

use std::fmt;

use crate::coord::Coord;

/// Number of holes on the board.
pub const HOLES: usize = 15;

/// Number of rows on the board.
pub const ROWS: usize = 5;

/// Index of the first (right-most) hole of each row, bottom row first.
const ROW_START: [u8; ROWS] = [0, 5, 9, 12, 14];

/// One of the 15 holes, `0..15`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position(u8);

impl Position {
    /// Centre hole of the bottom row; the only hole a winning last peg may sit in.
    pub const CENTER: Position = Position(2);

    /// The top corner, left empty by the common start.
    pub const APEX: Position = Position(14);

    pub const ALL: [Position; HOLES] = [
        Position(0),
        Position(1),
        Position(2),
        Position(3),
        Position(4),
        Position(5),
        Position(6),
        Position(7),
        Position(8),
        Position(9),
        Position(10),
        Position(11),
        Position(12),
        Position(13),
        Position(14),
    ];

    #[inline]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < HOLES {
            Some(Position(index))
        } else {
            None
        }
    }

    /// Like [`Position::new`], but a bad index is a programming error.
    #[inline]
    pub const fn at(index: u8) -> Self {
        assert!((index as usize) < HOLES, "hole index out of range");
        Position(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn bit(self) -> u16 {
        1 << self.0
    }

    /// Single-character name: `0`-`9`, then `A`-`E` for holes 10 to 14.
    pub const fn name(self) -> char {
        if self.0 < 10 {
            (b'0' + self.0) as char
        } else {
            (b'A' + self.0 - 10) as char
        }
    }

    /// Inverse of [`Position::name`]. Lower-case `a`-`e` are accepted too.
    pub fn from_name(c: char) -> Option<Self> {
        let index = match c {
            '0'..='9' => c as u8 - b'0',
            'A'..='E' => c as u8 - b'A' + 10,
            'a'..='e' => c as u8 - b'a' + 10,
            _ => return None,
        };
        Some(Position(index))
    }

    pub fn coord(self) -> Coord {
        let row = ROW_START
            .iter()
            .rposition(|&start| start <= self.0)
            .unwrap_or(0);
        Coord::new((self.0 - ROW_START[row]) as i8, row as i8)
    }

    pub fn from_coord(c: Coord) -> Option<Self> {
        if !c.on_board() {
            return None;
        }
        Some(Position(ROW_START[c.y as usize] + c.x as u8))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_hex_digits() {
        let names: String = Position::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names, "0123456789ABCDE");
        for p in Position::ALL {
            assert_eq!(Position::from_name(p.name()), Some(p));
        }
        assert_eq!(Position::from_name('c'), Some(Position::at(12)));
        assert_eq!(Position::from_name('F'), None);
    }

    #[test]
    fn coords_roundtrip_and_match_the_diagram() {
        for p in Position::ALL {
            assert_eq!(Position::from_coord(p.coord()), Some(p));
        }
        assert_eq!(Position::at(0).coord(), Coord::new(0, 0));
        assert_eq!(Position::at(4).coord(), Coord::new(4, 0));
        assert_eq!(Position::at(9).coord(), Coord::new(0, 2));
        assert_eq!(Position::at(11).coord(), Coord::new(2, 2));
        assert_eq!(Position::APEX.coord(), Coord::new(0, 4));
        assert_eq!(Position::CENTER.coord(), Coord::new(2, 0));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Position::new(14), Some(Position::APEX));
        assert_eq!(Position::new(15), None);
    }

    #[test]
    #[should_panic]
    fn at_fails_fast() {
        let _ = Position::at(15);
    }
}
