//! Brute-force solver for the 15-hole triangular peg solitaire.
//!
//! The full tree of legal play is built from a start state, then walked to
//! list every move sequence that leaves a single peg in the centre of the
//! bottom row.

pub mod arena;
pub mod config;
pub mod coord;
pub mod error;
pub mod moves;
pub mod position;
pub mod solution;
pub mod solve;
pub mod state;

pub use arena::Tree;
pub use error::{Error, Result};
pub use moves::{Move, MOVES};
pub use position::Position;
pub use solution::Solution;
pub use state::BoardState;
