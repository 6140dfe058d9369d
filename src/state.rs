use std::fmt;

use crate::coord::Coord;
use crate::moves::{Move, MOVES};
use crate::position::{Position, HOLES, ROWS};

/// Every hole filled except the apex (hole 14).
pub const START_MASK: u16 = 0b0_11_111_1111_11111;

const BOARD_MASK: u32 = (1 << HOLES) - 1;

/// Occupancy of the 15 holes, one bit per hole (bit `i` = hole `i`).
///
/// A state is never changed in place: transitions produce a new value via
/// [`BoardState::after`], and copies are plain `Copy`s.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoardState {
    bits: u16,
}

impl BoardState {
    /// Same as `BoardState::from_raw(0)`: the common start.
    pub fn new() -> Self {
        Self::from_raw(0)
    }

    /// Bit `i` of `raw` is the occupancy of hole `i`; bits above 14 are ignored.
    ///
    /// An empty board can never be a starting or reachable state, so `0` is
    /// taken to mean [`START_MASK`].
    pub fn from_raw(raw: u32) -> Self {
        let raw = if raw == 0 { START_MASK as u32 } else { raw };
        Self {
            bits: (raw & BOARD_MASK) as u16,
        }
    }

    /// The state reached by playing `mv` from `self`.
    ///
    /// The caller checks [`BoardState::is_legal_move`] first; an illegal move
    /// yields a well-formed but meaningless state.
    pub fn after(&self, mv: &Move) -> Self {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    #[inline]
    pub fn raw(&self) -> u16 {
        self.bits
    }

    #[inline]
    pub fn peg(&self, pos: Position) -> bool {
        self.bits & pos.bit() != 0
    }

    /// Occupancy by raw hole index. Panics if `index >= 15`.
    #[inline]
    pub fn peg_at(&self, index: usize) -> bool {
        assert!(index < HOLES, "hole index {index} out of range");
        (self.bits >> index) & 1 != 0
    }

    /// Number of pegs left, except that a lone peg in the bottom-row centre
    /// counts as 0.
    ///
    /// A game always keeps at least one peg, so 0 is free to mark the solved
    /// board; a lone peg anywhere else is a stuck game and counts as 1.
    pub fn count_pegs(&self) -> u32 {
        let n = self.bits.count_ones();
        if n == 1 && self.peg(Position::CENTER) {
            0
        } else {
            n
        }
    }

    #[inline]
    pub fn is_winner(&self) -> bool {
        self.count_pegs() == 0
    }

    /// Start and jump holes occupied, end hole empty.
    ///
    /// Geometry is not checked here; moves come from the catalog.
    #[inline]
    pub fn is_legal_move(&self, mv: &Move) -> bool {
        self.peg(mv.start()) && self.peg(mv.jump()) && !self.peg(mv.end())
    }

    /// Catalog moves playable from this state, in catalog order.
    pub fn legal_moves(&self) -> impl Iterator<Item = &'static Move> + '_ {
        MOVES.iter().filter(move |m| self.is_legal_move(m))
    }

    fn apply_move(&mut self, mv: &Move) {
        self.bits ^= mv.mask();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws the triangle, apex on top; empty holes are `.`.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let mut line = " ".repeat(row);
            let width = ROWS - row;
            for x in (0..width).rev() {
                let pos =
                    Position::from_coord(Coord::new(x as i8, row as i8)).ok_or(fmt::Error)?;
                line.push(if self.peg(pos) { pos.name() } else { '.' });
                if x > 0 {
                    line.push(' ');
                }
            }
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
