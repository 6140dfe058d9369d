use std::fmt::Write;

use log::trace;

use crate::arena::{NodeId, Tree};
use crate::moves::Move;
use crate::solution::Solution;

/// Winning nodes in pre-order: a node before its children, siblings in
/// catalog order.
pub fn winning_nodes(tree: &Tree) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect(tree, Tree::ROOT, &mut out);
    out
}

fn collect(tree: &Tree, id: NodeId, out: &mut Vec<NodeId>) {
    let node = tree.node(id);
    if node.state().count_pegs() == 0 {
        trace!("winner at node {id}");
        out.push(id);
    }
    for child in node.children() {
        collect(tree, child, out);
    }
}

/// Every winning line, one per row, each row terminated by `\n`.
pub fn find_winners(tree: &Tree) -> String {
    let mut out = String::new();
    for id in winning_nodes(tree) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", trace_back(tree, id));
    }
    out
}

/// The moves leading from the root to `id`, root first.
pub fn path_to(tree: &Tree, id: NodeId) -> Solution {
    let mut moves = Vec::new();
    push_path(tree, id, &mut moves);
    Solution::new(moves)
}

fn push_path(tree: &Tree, id: NodeId, moves: &mut Vec<Move>) {
    let node = tree.node(id);
    if let (Some(parent), Some(mv)) = (node.parent(), node.mv()) {
        push_path(tree, parent, moves);
        moves.push(mv);
    }
}

/// [`path_to`] rendered as `(S->E)(S->E)...`; empty for the root.
pub fn trace_back(tree: &Tree, id: NodeId) -> String {
    path_to(tree, id).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BoardState;

    // Pegs on 0, 1, 3 and 4: every line strands two pegs.
    #[test]
    fn no_winner_when_two_pegs_remain() {
        let tree = Tree::new(BoardState::from_raw(0b11011));
        assert!(winning_nodes(&tree).is_empty());
        assert_eq!(find_winners(&tree), "");
    }

    #[test]
    fn single_jump_to_the_centre_wins() {
        let tree = Tree::new(BoardState::from_raw(0b00011));
        assert_eq!(winning_nodes(&tree), vec![1]);
        assert_eq!(find_winners(&tree), "(0->2)\n");
    }

    #[test]
    fn root_that_is_already_won_traces_to_an_empty_line() {
        let tree = Tree::new(BoardState::from_raw(0b00100));
        assert_eq!(winning_nodes(&tree), vec![Tree::ROOT]);
        assert_eq!(trace_back(&tree, Tree::ROOT), "");
        assert_eq!(find_winners(&tree), "\n");
    }

    #[test]
    fn lines_are_listed_in_pre_order() {
        // Pegs on 5, 6, 9 and A.
        let tree = Tree::new(BoardState::from_raw(0b0110_0110_0000));
        assert_eq!(
            find_winners(&tree),
            "(5->7)(9->B)(B->2)\n\
             (9->0)(A->1)(0->2)\n\
             (9->B)(5->7)(B->2)\n\
             (A->1)(9->0)(0->2)\n"
        );
    }

    #[test]
    fn path_to_matches_trace_back() {
        let tree = Tree::new(BoardState::from_raw(0b0110_0110_0000));
        for id in winning_nodes(&tree) {
            let path = path_to(&tree, id);
            assert_eq!(path.len(), 3);
            assert_eq!(path.to_string(), trace_back(&tree, id));
        }
    }
}
