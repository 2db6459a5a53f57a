// Radial tree placement ("mind map" layout)
//
// - Root sits at the origin and owns the full circle [0, 2π)
// - Each child gets a slice of its parent's span proportional to its leaf count
// - A child is placed at the middle angle of its slice, one radial step away
//   from its parent; the step shrinks with depth down to `min_distance`
//
// Spans and centers are filled in arena order, which is pre-order, so a
// parent is always placed before its children.

use super::{AngularSpan, LayoutConfig, PointF};
use crate::tree::MindMap;

/// Hard floor applied even if the configured minimum is zero or negative.
const MIN_RADIAL_DISTANCE: f64 = 1.0;

pub(super) struct Placement {
    pub spans: Vec<AngularSpan>,
    pub positions: Vec<PointF>,
    pub clamped_from_level: Option<usize>,
}

fn unclamped_distance(level: usize, cfg: &LayoutConfig) -> f64 {
    cfg.base_distance - level as f64 * cfg.level_decrement
}

fn distance_floor(cfg: &LayoutConfig) -> f64 {
    cfg.min_distance.max(MIN_RADIAL_DISTANCE)
}

/// Distance from a node at `level` to each of its children.
pub fn radial_distance(level: usize, cfg: &LayoutConfig) -> f64 {
    unclamped_distance(level, cfg).max(distance_floor(cfg))
}

pub(super) fn place_radial(map: &MindMap, leaf_counts: &[usize], cfg: &LayoutConfig) -> Placement {
    let n = map.len();
    let mut spans = vec![AngularSpan::FULL; n];
    let mut positions = vec![PointF::default(); n];
    let mut clamped_from_level: Option<usize> = None;

    for node in map.nodes() {
        if node.is_leaf() {
            continue;
        }
        let parent_span = spans[node.nid.0];
        let center = positions[node.nid.0];
        let parent_leaves = leaf_counts[node.nid.0] as f64;

        if unclamped_distance(node.depth, cfg) < distance_floor(cfg) {
            clamped_from_level = Some(clamped_from_level.map_or(node.depth, |l| l.min(node.depth)));
        }
        let distance = radial_distance(node.depth, cfg);

        let mut current = parent_span.start;
        let last = node.children.len() - 1;
        for (i, &child) in node.children.iter().enumerate() {
            // Pin the final slice to the parent's end so rounding never leaves a gap.
            let end = if i == last {
                parent_span.end
            } else {
                current + parent_span.width() * (leaf_counts[child.0] as f64 / parent_leaves)
            };
            let span = AngularSpan { start: current, end };
            let angle = span.midpoint();

            spans[child.0] = span;
            positions[child.0] = PointF {
                x: center.x + distance * angle.cos(),
                y: center.y + distance * angle.sin(),
            };
            current = end;
        }
    }

    Placement { spans, positions, clamped_from_level }
}
