// Bottom-up leaf counting.
//
// The arena is in pre-order, so walking it backwards visits every child
// before its parent and each node is touched exactly once.

use crate::tree::MindMap;

/// Leaf count per node, indexed by `NodeId`. A leaf counts as 1; any other
/// node is the sum of its children.
pub fn leaf_counts(map: &MindMap) -> Vec<usize> {
    let mut counts = vec![0usize; map.len()];
    for node in map.nodes().iter().rev() {
        counts[node.nid.0] = if node.is_leaf() {
            1
        } else {
            node.children.iter().map(|c| counts[c.0]).sum()
        };
    }
    counts
}
