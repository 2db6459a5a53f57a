//! Output types for the web frontend.
//!
//! These structs are serialized to JSON and handed to JavaScript, which can
//! draw the map itself instead of using the built-in SVG adapter.

use serde::Serialize;

use crate::layout::{PointF, RectF};
use crate::render::{NodeRole, Scene};
use crate::Error;

/// A positioned node box
#[derive(Debug, Clone, Serialize)]
pub struct NodeOutput {
    pub id: usize,
    pub title: String,
    pub role: NodeRole,
    pub center: PointF,
    /// Box in map coordinates
    pub bounds: RectF,
    pub lines: Vec<String>,
    pub fill: String,
    pub font_size: f64,
    /// First baseline, relative to `center.y`
    pub text_y: f64,
}

/// A straight connector from parent center to child center
#[derive(Debug, Clone, Serialize)]
pub struct EdgeOutput {
    pub from: usize,
    pub to: usize,
    pub start: PointF,
    pub end: PointF,
}

/// Error information for the placeholder view
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    /// "invalid_input" or "json"
    pub kind: String,
    pub message: String,
}

/// The combined output sent to JavaScript
#[derive(Debug, Clone, Serialize)]
pub struct SceneOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<RectF>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeOutput>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl From<&Scene> for SceneOutput {
    fn from(scene: &Scene) -> Self {
        let nodes = scene
            .nodes()
            .map(|n| NodeOutput {
                id: n.id.0,
                title: n.title.clone(),
                role: n.role,
                center: n.center,
                bounds: n.bounds(),
                lines: n.lines.clone(),
                fill: n.fill.clone(),
                font_size: n.font_size,
                text_y: n.text_y,
            })
            .collect();
        let edges = scene
            .edges()
            .map(|e| EdgeOutput { from: e.from.0, to: e.to.0, start: e.start, end: e.end })
            .collect();
        SceneOutput { viewport: Some(scene.viewport), nodes, edges, error: None }
    }
}

impl From<&Error> for SceneOutput {
    fn from(err: &Error) -> Self {
        SceneOutput {
            viewport: None,
            nodes: vec![],
            edges: vec![],
            error: Some(ErrorInfo { kind: err.kind().to_string(), message: err.to_string() }),
        }
    }
}
