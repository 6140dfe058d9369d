use log::debug;

use crate::arena::tree::{Node, NodeId, Tree};
use crate::state::BoardState;

pub struct TreeBuilder {
    initial: BoardState,
}

impl TreeBuilder {
    pub fn new(initial: BoardState) -> Self {
        Self { initial }
    }

    /// Expand every legal move from every reachable node.
    ///
    /// Recursion depth is bounded by the number of pegs, since each jump
    /// removes one. Children of a node are pushed together, in catalog order,
    /// before any of them is expanded.
    pub fn build(&self) -> Tree {
        debug!(
            "building tree from {:#017b} ({} pegs)",
            self.initial.raw(),
            self.initial.raw().count_ones()
        );

        let mut nodes: Vec<Node> = vec![Node {
            state: self.initial,
            parent: None,
            mv: None,
            first_child: 0,
            child_count: 0,
        }];
        expand(&mut nodes, Tree::ROOT);

        debug!("tree built: {} nodes", nodes.len());
        Tree { nodes }
    }
}

fn expand(nodes: &mut Vec<Node>, id: NodeId) {
    let state = nodes[id as usize].state;
    let first = nodes.len() as NodeId;

    for mv in state.legal_moves() {
        nodes.push(Node {
            state: state.after(mv),
            parent: Some(id),
            mv: Some(*mv),
            first_child: 0,
            child_count: 0,
        });
    }

    let count = nodes.len() as NodeId - first;
    let node = &mut nodes[id as usize];
    node.first_child = first;
    node.child_count = count as u8;

    for child in first..first + count {
        expand(nodes, child);
    }
}
