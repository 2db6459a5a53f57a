//! Scene building: turns a laid-out mind map into positioned shapes.
//!
//! The scene is a flat, ordered list of edges and node boxes in paint order,
//! independent of any graphics API. [`Scene::to_svg`] and the wasm DOM
//! adapter are thin translations of it.

use serde::{Deserialize, Serialize};

use crate::layout::{layout_mind_map, LayoutConfig, LayoutResult, PointF, RectF, SizeF};
use crate::text::wrap_label;
use crate::tree::{MindMap, MindMapInput, Node, NodeId};
use crate::Result;

pub(crate) mod svg;

/// Visual category of a node. Only the root is styled differently.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Root,
    Branch,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub root_fill: String,
    pub branch_fill: String,
    pub node_stroke: String,
    pub node_stroke_width: f64,
    pub corner_radius: f64,
    pub edge_stroke: String,
    pub edge_stroke_width: f64,
    pub text_fill: String,
    pub font_family: String,
    pub root_font_size: f64,
    pub branch_font_size: f64,
    pub line_height: f64,
    pub root_width: f64,
    pub branch_width: f64,
    pub root_vertical_padding: f64,
    pub branch_vertical_padding: f64,
    pub root_chars_per_line: usize,
    pub branch_chars_per_line: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            root_fill: "#3b82f6".to_string(),
            branch_fill: "#10b981".to_string(),
            node_stroke: "white".to_string(),
            node_stroke_width: 2.0,
            corner_radius: 15.0,
            edge_stroke: "#6b7280".to_string(),
            edge_stroke_width: 1.5,
            text_fill: "white".to_string(),
            font_family: "Inter, sans-serif".to_string(),
            root_font_size: 14.0,
            branch_font_size: 12.0,
            line_height: 16.0,
            root_width: 160.0,
            branch_width: 140.0,
            root_vertical_padding: 15.0,
            branch_vertical_padding: 12.0,
            root_chars_per_line: 18,
            branch_chars_per_line: 16,
        }
    }
}

impl RenderStyle {
    fn fill(&self, role: NodeRole) -> &str {
        match role {
            NodeRole::Root => &self.root_fill,
            NodeRole::Branch => &self.branch_fill,
        }
    }

    fn font_size(&self, role: NodeRole) -> f64 {
        match role {
            NodeRole::Root => self.root_font_size,
            NodeRole::Branch => self.branch_font_size,
        }
    }

    fn width(&self, role: NodeRole) -> f64 {
        match role {
            NodeRole::Root => self.root_width,
            NodeRole::Branch => self.branch_width,
        }
    }

    fn vertical_padding(&self, role: NodeRole) -> f64 {
        match role {
            NodeRole::Root => self.root_vertical_padding,
            NodeRole::Branch => self.branch_vertical_padding,
        }
    }

    fn chars_per_line(&self, role: NodeRole) -> usize {
        match role {
            NodeRole::Root => self.root_chars_per_line,
            NodeRole::Branch => self.branch_chars_per_line,
        }
    }
}

/// Wrapped label and box size of one node, before it is positioned.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeBox {
    pub role: NodeRole,
    pub lines: Vec<String>,
    pub size: SizeF,
    /// Baseline of the first text line, relative to the box center.
    pub text_y: f64,
}

/// Wrap a node's title and size its box. Height grows with the line count.
pub fn measure_node(node: &Node, role: NodeRole, style: &RenderStyle) -> NodeBox {
    let lines = wrap_label(&node.title, style.chars_per_line(role));
    let pad = style.vertical_padding(role);
    let height = lines.len() as f64 * style.line_height + pad * 2.0;
    let text_y = -(height / 2.0) + style.line_height + pad - style.line_height / 4.0;
    NodeBox {
        role,
        lines,
        size: SizeF { w: style.width(role), h: height },
        text_y,
    }
}

fn role_of(map: &MindMap, nid: NodeId) -> NodeRole {
    if nid == map.root() { NodeRole::Root } else { NodeRole::Branch }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeShape {
    pub from: NodeId,
    pub to: NodeId,
    pub start: PointF,
    pub end: PointF,
    pub stroke: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeShape {
    pub id: NodeId,
    pub role: NodeRole,
    pub title: String,
    pub center: PointF,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub lines: Vec<String>,
    pub text_fill: String,
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    pub text_y: f64,
}

impl NodeShape {
    pub fn bounds(&self) -> RectF {
        RectF::centered(self.center, SizeF { w: self.width, h: self.height })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneItem {
    Edge(EdgeShape),
    Node(NodeShape),
}

/// Everything needed to draw one mind map, in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub viewport: RectF,
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeShape> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Node(n) => Some(n),
            SceneItem::Edge(_) => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeShape> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Edge(e) => Some(e),
            SceneItem::Node(_) => None,
        })
    }
}

/// Build the scene for an already laid-out map.
///
/// Paint order per node: its outgoing edges, then its own box, then its
/// subtrees. Every edge is therefore painted before both boxes it connects.
pub fn render_scene(map: &MindMap, layout: &LayoutResult, style: &RenderStyle) -> Scene {
    let mut items = Vec::with_capacity(map.len() + map.edge_count());
    let boxes: Vec<NodeBox> = map
        .nodes()
        .iter()
        .map(|n| measure_node(n, role_of(map, n.nid), style))
        .collect();

    // Arena order is pre-order, so a plain walk visits parents before children.
    for node in map.nodes() {
        let center = layout.position(node.nid);
        for &child in &node.children {
            items.push(SceneItem::Edge(EdgeShape {
                from: node.nid,
                to: child,
                start: center,
                end: layout.position(child),
                stroke: style.edge_stroke.clone(),
                stroke_width: style.edge_stroke_width,
            }));
        }

        let nb = &boxes[node.nid.0];
        items.push(SceneItem::Node(NodeShape {
            id: node.nid,
            role: nb.role,
            title: node.title.clone(),
            center,
            width: nb.size.w,
            height: nb.size.h,
            corner_radius: style.corner_radius,
            fill: style.fill(nb.role).to_string(),
            stroke: style.node_stroke.clone(),
            stroke_width: style.node_stroke_width,
            lines: nb.lines.clone(),
            text_fill: style.text_fill.clone(),
            font_family: style.font_family.clone(),
            font_size: style.font_size(nb.role),
            line_height: style.line_height,
            text_y: nb.text_y,
        }));
    }

    Scene { viewport: layout.viewport, items }
}

/// Validate, lay out and render `input` in one go.
pub fn build_scene(input: &MindMapInput, cfg: &LayoutConfig, style: &RenderStyle) -> Result<Scene> {
    let map = MindMap::compile(input, cfg.max_depth)?;
    let sizes: Vec<SizeF> = map
        .nodes()
        .iter()
        .map(|n| measure_node(n, role_of(&map, n.nid), style).size)
        .collect();
    let layout = layout_mind_map(&map, &sizes, cfg);
    Ok(render_scene(&map, &layout, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn scene(input: &MindMapInput) -> Scene {
        build_scene(input, &LayoutConfig::default(), &RenderStyle::default()).unwrap()
    }

    #[test]
    fn test_single_leaf_root() {
        let s = scene(&MindMapInput::leaf("Summary"));
        assert_eq!(s.edges().count(), 0);
        let nodes: Vec<_> = s.nodes().collect();
        assert_eq!(nodes.len(), 1);
        let root = nodes[0];
        assert_eq!(root.role, NodeRole::Root);
        assert_eq!(root.fill, "#3b82f6");
        assert_eq!(root.lines, ["Summary"]);
        assert_eq!((root.width, root.height), (160.0, 46.0));
        assert_eq!(root.text_y, -23.0 + 16.0 + 15.0 - 4.0);
        assert_eq!(s.viewport, RectF { x: -160.0, y: -120.0, w: 320.0, h: 240.0 });
    }

    #[test]
    fn test_branch_box_style() {
        let s = scene(&MindMapInput::branch(
            "Lease Agreement",
            vec![MindMapInput::leaf("Obligations of the tenant under clause")],
        ));
        let branch = s.nodes().find(|n| n.role == NodeRole::Branch).unwrap();
        assert_eq!(branch.fill, "#10b981");
        assert_eq!(branch.font_size, 12.0);
        assert_eq!(branch.lines.len(), 3);
        assert_eq!((branch.width, branch.height), (140.0, 3.0 * 16.0 + 24.0));
    }

    #[test]
    fn test_edges_painted_before_their_nodes() {
        let input = MindMapInput::branch(
            "Root",
            vec![
                MindMapInput::branch("A", vec![MindMapInput::leaf("A1"), MindMapInput::leaf("A2")]),
                MindMapInput::leaf("B"),
            ],
        );
        let s = scene(&input);
        assert_eq!(s.nodes().count(), 5);
        assert_eq!(s.edges().count(), 4);

        let node_index = |id: NodeId| {
            s.items
                .iter()
                .position(|i| matches!(i, SceneItem::Node(n) if n.id == id))
                .unwrap()
        };
        for (i, item) in s.items.iter().enumerate() {
            if let SceneItem::Edge(e) = item {
                assert!(i < node_index(e.from));
                assert!(i < node_index(e.to));
            }
        }
    }

    #[test]
    fn test_edges_connect_centers() {
        let s = scene(&MindMapInput::branch("Root", vec![MindMapInput::leaf("A")]));
        let edge = s.edges().next().unwrap();
        let a = s.nodes().find(|n| n.id == edge.to).unwrap();
        assert_eq!(edge.start, PointF { x: 0.0, y: 0.0 });
        assert_eq!(edge.end, a.center);
        assert_eq!(edge.stroke, "#6b7280");
    }

    #[test]
    fn test_every_box_inside_viewport() {
        let input = MindMapInput::branch(
            "A fairly long root title that needs wrapping",
            (0..6)
                .map(|i| MindMapInput::branch(format!("Theme {i} with several words in it"), vec![MindMapInput::leaf("Detail")]))
                .collect(),
        );
        let s = scene(&input);
        for node in s.nodes() {
            assert!(s.viewport.contains_rect(&node.bounds()));
        }
    }

    #[test]
    fn test_deep_chain_renders() {
        let mut input = MindMapInput::leaf("end");
        for i in 0..50 {
            input = MindMapInput::branch(format!("step {i}"), vec![input]);
        }
        let s = scene(&input);
        assert_eq!(s.nodes().count(), 51);
        assert!(s.nodes().all(|n| n.center.x.is_finite() && n.center.y.is_finite()));
    }

    #[test]
    fn test_invalid_input_produces_no_scene() {
        let err = build_scene(&MindMapInput::default(), &LayoutConfig::default(), &RenderStyle::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }
}
