use std::ops::Range;

use crate::arena::build::TreeBuilder;
use crate::moves::Move;
use crate::solution::Solution;
use crate::solve::{self, TreeStats};
use crate::state::BoardState;

pub type NodeId = u32;

/// One board state in the tree, with the move that produced it.
///
/// `parent` and `mv` point back towards the root and are only used to
/// reconstruct move sequences; a node's children are owned by the tree as a
/// contiguous id range.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) state: BoardState,
    pub(crate) parent: Option<NodeId>,
    pub(crate) mv: Option<Move>,
    pub(crate) first_child: NodeId,
    pub(crate) child_count: u8,
}

impl Node {
    #[inline]
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The move played from the parent to reach this node; `None` for the root.
    #[inline]
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    /// Child ids, in catalog order of the moves that produced them.
    #[inline]
    pub fn children(&self) -> Range<NodeId> {
        self.first_child..self.first_child + self.child_count as NodeId
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }
}

/// The full tree of legal play from an initial state, built eagerly.
///
/// Repeated states are not merged: the same board reached by two different
/// move orders appears as two nodes.
#[derive(Clone, Debug)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
}

impl Tree {
    pub const ROOT: NodeId = 0;

    pub fn new(initial: BoardState) -> Self {
        TreeBuilder::new(initial).build()
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT as usize]
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn initial_state(&self) -> BoardState {
        self.root().state
    }

    /// One line per winning node, `(S->E)` moves from the root, pre-order.
    pub fn find_winners(&self) -> String {
        solve::find_winners(self)
    }

    /// Ids of the winning nodes, in the order [`Tree::find_winners`] lists them.
    pub fn winners(&self) -> Vec<NodeId> {
        solve::winning_nodes(self)
    }

    /// Winning move sequences, in the order [`Tree::find_winners`] lists them.
    pub fn solutions(&self) -> Vec<Solution> {
        self.winners()
            .into_iter()
            .map(|id| solve::path_to(self, id))
            .collect()
    }

    /// Move sequence from the root to `id`.
    pub fn trace_back(&self, id: NodeId) -> String {
        solve::trace_back(self, id)
    }

    /// Longest root-to-leaf path, in moves.
    pub fn height(&self) -> u32 {
        solve::height(self, Self::ROOT)
    }

    pub fn stats(&self) -> TreeStats {
        solve::stats(self)
    }
}
