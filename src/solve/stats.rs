use crate::arena::{NodeId, Tree};

/// Shape of a built tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub winners: usize,
    /// Longest root-to-leaf path, in moves.
    pub height: u32,
}

/// Height of the subtree under `id`: 0 for a leaf, else one more than the
/// tallest child.
pub fn height(tree: &Tree, id: NodeId) -> u32 {
    tree.node(id)
        .children()
        .map(|child| height(tree, child) + 1)
        .max()
        .unwrap_or(0)
}

pub fn stats(tree: &Tree) -> TreeStats {
    let mut out = TreeStats {
        nodes: tree.len(),
        height: height(tree, Tree::ROOT),
        ..TreeStats::default()
    };
    for id in 0..tree.len() as NodeId {
        let node = tree.node(id);
        if node.is_leaf() {
            out.leaves += 1;
        }
        if node.state().count_pegs() == 0 {
            out.winners += 1;
        }
    }
    out
}
