//! Move sequences in `(S->E)` notation, and replaying them on a board.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::moves::Move;
use crate::position::Position;
use crate::state::BoardState;

/// An ordered list of jumps, as printed on one line of solver output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Solution {
    moves: Vec<Move>,
}

impl Solution {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Play every move from `start`, checking each is legal where it is played.
    ///
    /// Returns all visited states, `start` first, so the result has
    /// `len() + 1` entries.
    pub fn replay(&self, start: BoardState) -> Result<Vec<BoardState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(start);
        let mut current = start;
        for (i, mv) in self.moves.iter().enumerate() {
            if !current.is_legal_move(mv) {
                return Err(Error::IllegalMove {
                    step: i + 1,
                    mv: *mv,
                    raw: current.raw(),
                });
            }
            current = current.after(mv);
            states.push(current);
        }
        Ok(states)
    }

    /// True if the sequence is legal from `start` and ends on a winning board.
    pub fn solves(&self, start: BoardState) -> bool {
        self.replay(start)
            .ok()
            .and_then(|states| states.last().copied())
            .is_some_and(|last| last.is_winner())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in &self.moves {
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = Error;

    /// Parses `(S->E)(S->E)...`; whitespace between moves is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut moves = Vec::new();
        let mut rest = s.trim_start();
        while !rest.is_empty() {
            let close = match (rest.starts_with('('), rest.find(')')) {
                (true, Some(close)) => close,
                _ => {
                    return Err(Error::InvalidMoveNotation {
                        text: rest.to_string(),
                    })
                }
            };
            moves.push(parse_move(&rest[..=close])?);
            rest = rest[close + 1..].trim_start();
        }
        Ok(Self { moves })
    }
}

/// One `(S->E)` token.
fn parse_move(token: &str) -> Result<Move> {
    let malformed = || Error::InvalidMoveNotation {
        text: token.to_string(),
    };

    let inner = &token[1..token.len() - 1];
    let (from, to) = inner.split_once("->").ok_or_else(malformed)?;
    let (start, end) = match (single_char(from), single_char(to)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(malformed()),
    };

    let start_pos =
        Position::from_name(start).ok_or(Error::InvalidPositionName { name: start })?;
    let end_pos = Position::from_name(end).ok_or(Error::InvalidPositionName { name: end })?;

    Move::find(start_pos, end_pos).ok_or(Error::NoSuchMove { start, end })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_the_same_text() {
        let text = "(9->E)(0->9)(7->5)";
        let sol: Solution = text.parse().unwrap();
        assert_eq!(sol.len(), 3);
        assert_eq!(sol.to_string(), text);
    }

    #[test]
    fn whitespace_between_moves_is_ignored() {
        let sol: Solution = " (9->E) (0->9)\n".parse().unwrap();
        assert_eq!(sol.to_string(), "(9->E)(0->9)");
    }

    #[test]
    fn empty_text_is_an_empty_solution() {
        let sol: Solution = "".parse().unwrap();
        assert!(sol.is_empty());
        assert_eq!(sol.replay(BoardState::new()).unwrap(), vec![BoardState::new()]);
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(matches!(
            "(9-E)".parse::<Solution>(),
            Err(Error::InvalidMoveNotation { .. })
        ));
        assert!(matches!(
            "(9->E".parse::<Solution>(),
            Err(Error::InvalidMoveNotation { .. })
        ));
        assert!(matches!(
            "(9->EE)".parse::<Solution>(),
            Err(Error::InvalidMoveNotation { .. })
        ));
        assert_eq!(
            "(9->F)".parse::<Solution>(),
            Err(Error::InvalidPositionName { name: 'F' })
        );
        assert_eq!(
            "(0->1)".parse::<Solution>(),
            Err(Error::NoSuchMove {
                start: '0',
                end: '1'
            })
        );
    }

    #[test]
    fn replay_stops_at_the_first_illegal_move() {
        // After (9->E), hole 9 is empty so the second (9->E) cannot be played.
        let sol: Solution = "(9->E)(9->E)".parse().unwrap();
        let err = sol.replay(BoardState::new()).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { step: 2, .. }));
        assert!(!sol.solves(BoardState::new()));
    }

    #[test]
    fn replay_removes_one_peg_per_move() {
        let sol: Solution = "(9->E)(0->9)(7->5)".parse().unwrap();
        let states = sol.replay(BoardState::new()).unwrap();
        let counts: Vec<u32> = states.iter().map(|s| s.count_pegs()).collect();
        assert_eq!(counts, [14, 13, 12, 11]);
    }
}
