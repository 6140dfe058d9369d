use std::ops::{Add, Neg, Sub};

/// A hole on the triangular lattice.
///
/// `y` is the row counted from the bottom (0..=4) and `x` is the offset from
/// the right-hand end of that row, so the bottom row reads `x = 4 3 2 1 0`
/// from left to right.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

/// The three lines a jump can follow, one direction each.
///
/// Along a row, up the right-hand diagonal, up the left-hand diagonal.
pub const AXES: [Coord; 3] = [Coord::new(1, 0), Coord::new(0, 1), Coord::new(-1, 1)];

impl Coord {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// True if `self` is one step along any axis, in either direction.
    #[inline]
    pub fn is_unit_step(self) -> bool {
        AXES.iter().any(|&a| self == a || self == -a)
    }

    /// True if the coordinate names a hole of the 5-row board.
    #[inline]
    pub fn on_board(self) -> bool {
        self.y >= 0 && self.x >= 0 && self.x + self.y <= 4
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_has_fifteen_holes() {
        let mut n = 0;
        for y in -1..6 {
            for x in -1..6 {
                if Coord::new(x, y).on_board() {
                    n += 1;
                }
            }
        }
        assert_eq!(n, 15);
    }

    #[test]
    fn unit_steps_are_the_six_neighbours() {
        let mut n = 0;
        for y in -2..=2 {
            for x in -2..=2 {
                if Coord::new(x, y).is_unit_step() {
                    n += 1;
                }
            }
        }
        assert_eq!(n, 6);
        assert!(!Coord::new(1, 1).is_unit_step());
        assert!(!Coord::new(0, 0).is_unit_step());
    }
}
