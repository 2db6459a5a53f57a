//
// Compile step: MindMapInput (wire tree) -> MindMap (layout-friendly arena)
//
// What this does:
// - Flattens the nested input into an indexed vector in pre-order
//   (root is NodeId(0), every parent index is lower than its children's)
// - Records parent pointers, child lists and depth per node
// - Rejects nodes without a title, naming their path in the input
// - Bounds depth so a hostile payload cannot blow the stack
//
// The arena is owned by one layout pass and never shared with the input,
// so later passes annotate it through parallel vectors instead of mutation.

use serde::Serialize;

use crate::tree::MindMapInput;
use crate::{Error, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub nid: NodeId,
    pub title: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Root is depth 0.
    pub depth: usize,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A validated mind map stored as a pre-order arena.
#[derive(Debug, Clone)]
pub struct MindMap {
    nodes: Vec<Node>,
}

impl MindMap {
    /// Validate and flatten `input`. Trees deeper than `max_depth` are rejected.
    pub fn compile(input: &MindMapInput, max_depth: usize) -> Result<MindMap> {
        let mut nodes = Vec::new();
        push_node(input, None, 0, max_depth, &mut String::from("root"), &mut nodes)?;
        Ok(MindMap { nodes })
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, nid: NodeId) -> &Node {
        &self.nodes[nid.0]
    }

    /// All nodes in pre-order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a compiled map has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of parent-child pairs.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}

fn push_node(
    input: &MindMapInput,
    parent: Option<NodeId>,
    depth: usize,
    max_depth: usize,
    path: &mut String,
    nodes: &mut Vec<Node>,
) -> Result<NodeId> {
    if depth > max_depth {
        return Err(Error::invalid(format!(
            "tree is deeper than {max_depth} levels at {path}"
        )));
    }
    let title = input
        .title
        .clone()
        .ok_or_else(|| Error::invalid(format!("node {path} has no title")))?;
    // Empty labels are fine below the root, but an untitled map is not a map.
    if parent.is_none() && title.is_empty() {
        return Err(Error::invalid("root node has an empty title"));
    }

    let nid = NodeId(nodes.len());
    nodes.push(Node { nid, title, parent, children: Vec::new(), depth });

    for (i, child) in input.children().iter().enumerate() {
        let restore = path.len();
        path.push_str(&format!(".children[{i}]"));
        let cid = push_node(child, Some(nid), depth + 1, max_depth, path, nodes)?;
        path.truncate(restore);
        nodes[nid.0].children.push(cid);
    }

    Ok(nid)
}
