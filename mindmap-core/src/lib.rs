//! Radial mind-map engine for the document explainer.
//!
//! The summarizer hands us a tree of titled nodes; this crate lays it out as a
//! radial map (children fan out around their parent, each subtree getting an
//! angular share proportional to its leaf count) and turns the result into a
//! drawable [`Scene`]. The scene can be serialized to JSON, written out as a
//! standalone SVG document, or drawn straight into a DOM container from wasm.
//!
//! ```
//! use mindmap_core::{build_scene, parse_mind_map_json, LayoutConfig, RenderStyle};
//!
//! let input = parse_mind_map_json(r#"{"title": "Lease", "children": [{"title": "Rent"}]}"#)?;
//! let scene = build_scene(&input, &LayoutConfig::default(), &RenderStyle::default())?;
//! assert_eq!(scene.nodes().count(), 2);
//! assert!(scene.to_svg().starts_with("<svg"));
//! # Ok::<(), mindmap_core::Error>(())
//! ```

mod layout;
mod output;
mod render;
mod text;
mod tree;
mod wasm;

use serde::Deserialize;

pub use layout::{
    layout_mind_map, leaf_counts, radial_distance, AngularSpan, LayoutConfig, LayoutResult,
    PointF, RectF, SizeF,
};
pub use output::{EdgeOutput, ErrorInfo, NodeOutput, SceneOutput};
pub use render::{
    build_scene, measure_node, render_scene, EdgeShape, NodeBox, NodeRole, NodeShape,
    RenderStyle, Scene, SceneItem,
};
pub use text::wrap_label;
pub use tree::{parse_mind_map_json, MindMap, MindMapInput, Node, NodeId, MAX_JSON_TREE_DEPTH};

/// Errors surfaced to callers instead of a partially drawn map.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tree is missing, has no title somewhere, or is too deep to lay out.
    #[error("invalid mind map input: {message}")]
    InvalidInput { message: String },
    #[error("mind map JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput { message: message.into() }
    }

    /// Stable short name used in the JSON error payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "invalid_input",
            Error::Json(_) => "json",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Caller overrides, as sent from JavaScript: `{ "layout": {...}, "style": {...} }`.
/// Any field left out keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub layout: LayoutConfig,
    pub style: RenderStyle,
}

impl RenderOptions {
    /// Parse options JSON. Blank input means "use the defaults".
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }
}
