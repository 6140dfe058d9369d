//! The materialised game tree: every line of play from one start state.

mod build;
mod tree;

pub use build::TreeBuilder;
pub use tree::{Node, NodeId, Tree};
