//! The fixed set of jumps the board geometry allows.

use std::fmt;

use crate::position::Position;

/// A peg at `start` jumps over the peg at `jump` into the empty hole `end`,
/// and the jumped peg is removed.
///
/// Whether a move can be played is a property of a board state, see
/// [`crate::state::BoardState::is_legal_move`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    start: Position,
    jump: Position,
    end: Position,
}

impl Move {
    const fn of(start: u8, jump: u8, end: u8) -> Self {
        Self {
            start: Position::at(start),
            jump: Position::at(jump),
            end: Position::at(end),
        }
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn jump(&self) -> Position {
        self.jump
    }

    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }

    /// Bits of the three holes a move touches.
    #[inline]
    pub fn mask(&self) -> u16 {
        self.start.bit() | self.jump.bit() | self.end.bit()
    }

    /// The catalog move from `start` to `end`, if the two holes are two apart
    /// on a line.
    pub fn find(start: Position, end: Position) -> Option<Move> {
        MOVES
            .iter()
            .copied()
            .find(|m| m.start == start && m.end == end)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}->{})", self.start.name(), self.end.name())
    }
}

/// Number of jumps on the 15-hole board.
pub const MOVE_COUNT: usize = 36;

/// Every jump on the board, ordered by start hole.
///
/// Tree expansion iterates this table in order, so it also fixes the order in
/// which solutions are reported.
pub static MOVES: [Move; MOVE_COUNT] = [
    Move::of(0, 1, 2),
    Move::of(0, 5, 9),
    Move::of(1, 2, 3),
    Move::of(1, 6, 10),
    Move::of(2, 1, 0),
    Move::of(2, 6, 9),
    Move::of(2, 7, 11),
    Move::of(2, 3, 4),
    Move::of(3, 2, 1),
    Move::of(3, 7, 10),
    Move::of(4, 3, 2),
    Move::of(4, 8, 11),
    Move::of(5, 6, 7),
    Move::of(5, 9, 12),
    Move::of(6, 7, 8),
    Move::of(6, 10, 13),
    Move::of(7, 6, 5),
    Move::of(7, 10, 12),
    Move::of(8, 7, 6),
    Move::of(8, 11, 13),
    Move::of(9, 5, 0),
    Move::of(9, 6, 2),
    Move::of(9, 10, 11),
    Move::of(9, 12, 14),
    Move::of(10, 6, 1),
    Move::of(10, 7, 3),
    Move::of(11, 7, 2),
    Move::of(11, 8, 4),
    Move::of(11, 10, 9),
    Move::of(11, 13, 14),
    Move::of(12, 9, 5),
    Move::of(12, 10, 7),
    Move::of(13, 10, 6),
    Move::of(13, 11, 8),
    Move::of(14, 12, 9),
    Move::of(14, 13, 11),
];
