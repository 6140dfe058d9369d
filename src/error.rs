//! Error types for parsing and replaying move sequences.
//!
//! Tree construction and search cannot fail; errors only arise where text
//! comes in from outside (hole names, move notation, start masks).

use thiserror::Error;

use crate::moves::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown hole name '{name}' (expected 0-9 or A-E)")]
    InvalidPositionName { name: char },

    #[error("malformed move notation '{text}' (expected '(S->E)')")]
    InvalidMoveNotation { text: String },

    #[error("no jump leads from hole {start} to hole {end}")]
    NoSuchMove { start: char, end: char },

    #[error("move {step} {mv} is not legal from board {raw:#017b}")]
    IllegalMove { step: usize, mv: Move, raw: u16 },

    #[error("invalid start mask '{input}': {reason}")]
    InvalidStartMask { input: String, reason: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
