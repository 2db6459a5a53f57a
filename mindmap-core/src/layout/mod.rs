// Radial mind-map layouter.
//
// Goals:
// - Deterministic: same tree, same config, same picture
// - Root at the origin, children fanned around their parent
// - Angular share of every subtree proportional to its leaf count
// - Viewport framing every node box plus a fixed margin
//
// Passes (each a plain walk over the pre-order arena):
// - leaf_count: bottom-up leaf counts
// - radial_placement: top-down angular spans and centers
// - viewport: bounding box of all node footprints
//
// Output:
// - LayoutResult with per-node spans/centers (indexed by NodeId) + viewport.

use serde::{Deserialize, Serialize};

use crate::tree::{MindMap, NodeId, MAX_JSON_TREE_DEPTH};

mod leaf_count;
mod radial_placement;
mod viewport;

pub use leaf_count::leaf_counts;
pub use radial_placement::radial_distance;

use radial_placement::place_radial;
use viewport::compute_viewport;

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn distance(&self, other: &PointF) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub w: f64,
    pub h: f64,
}

impl SizeF {
    /// Component-wise maximum.
    pub fn max(self, other: SizeF) -> SizeF {
        SizeF { w: self.w.max(other.w), h: self.h.max(other.h) }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn centered(center: PointF, size: SizeF) -> RectF {
        RectF { x: center.x - size.w / 2.0, y: center.y - size.h / 2.0, w: size.w, h: size.h }
    }

    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }

    pub fn union(&self, other: &RectF) -> RectF {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        RectF { x: x0, y: y0, w: x1 - x0, h: y1 - y0 }
    }

    pub fn inflate(&self, by: f64) -> RectF {
        RectF { x: self.x - by, y: self.y - by, w: self.w + 2.0 * by, h: self.h + 2.0 * by }
    }

    pub fn contains_rect(&self, other: &RectF) -> bool {
        const EPS: f64 = 1e-9;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

/// Half-open angular range `[start, end)` in radians.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AngularSpan {
    pub start: f64,
    pub end: f64,
}

impl AngularSpan {
    pub const FULL: AngularSpan = AngularSpan { start: 0.0, end: std::f64::consts::TAU };

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> f64 {
        self.start + self.width() / 2.0
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Parent-to-child distance at the root level.
    pub base_distance: f64,
    /// How much shorter each deeper level's edges get.
    pub level_decrement: f64,
    /// Floor for the parent-to-child distance on deep trees.
    pub min_distance: f64,
    /// Margin around the framed map. Negative values act as 0.
    pub padding: f64,
    /// Minimum box reserved around every node center when framing.
    /// Negative sides act as 0.
    pub footprint: SizeF,
    /// Deepest level accepted when compiling a tree.
    pub max_depth: usize,
}

impl LayoutConfig {
    fn framing_padding(&self) -> f64 {
        self.padding.max(0.0)
    }

    fn framing_footprint(&self) -> SizeF {
        self.footprint.max(SizeF::default())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_distance: 300.0,
            level_decrement: 50.0,
            min_distance: 40.0,
            padding: 80.0,
            footprint: SizeF { w: 160.0, h: 80.0 },
            max_depth: MAX_JSON_TREE_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutResult {
    /// Leaf count per node, indexed by `NodeId`.
    pub leaf_counts: Vec<usize>,
    /// Angular span allotted to each node's subtree.
    pub spans: Vec<AngularSpan>,
    /// Node centers; the root sits at the origin.
    pub positions: Vec<PointF>,
    /// Shallowest parent level whose edges hit `min_distance`, if any.
    pub clamped_from_level: Option<usize>,
    /// Framing rectangle including padding.
    pub viewport: RectF,
}

impl LayoutResult {
    pub fn position(&self, nid: NodeId) -> PointF {
        self.positions[nid.0]
    }

    pub fn span(&self, nid: NodeId) -> AngularSpan {
        self.spans[nid.0]
    }

    pub fn leaf_count(&self, nid: NodeId) -> usize {
        self.leaf_counts[nid.0]
    }
}

/// Lay out `map`. `node_sizes` holds the drawn box of each node (by `NodeId`);
/// missing entries fall back to `cfg.footprint`.
pub fn layout_mind_map(map: &MindMap, node_sizes: &[SizeF], cfg: &LayoutConfig) -> LayoutResult {
    let leaf_counts = leaf_counts(map);
    let placement = place_radial(map, &leaf_counts, cfg);

    let footprint = cfg.framing_footprint();
    let footprints: Vec<SizeF> = (0..map.len())
        .map(|i| node_sizes.get(i).map_or(footprint, |s| s.max(footprint)))
        .collect();
    let viewport = compute_viewport(&placement.positions, &footprints, cfg.framing_padding());

    if let Some(level) = placement.clamped_from_level {
        tracing::warn!(
            level,
            min_distance = cfg.min_distance,
            "radial distance clamped on deep mind map"
        );
    }
    tracing::debug!(
        nodes = map.len(),
        leaves = leaf_counts[0],
        depth = map.max_depth(),
        "mind map laid out"
    );

    LayoutResult {
        leaf_counts,
        spans: placement.spans,
        positions: placement.positions,
        clamped_from_level: placement.clamped_from_level,
        viewport,
    }
}
