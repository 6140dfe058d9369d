//! Queries over a built [`crate::arena::Tree`].

mod stats;
mod winners;

pub use stats::{height, stats, TreeStats};
pub use winners::{find_winners, path_to, trace_back, winning_nodes};
