mod compile;
mod types;

pub use compile::{MindMap, Node, NodeId};
pub use types::{parse_mind_map_json, MindMapInput, MAX_JSON_TREE_DEPTH};
