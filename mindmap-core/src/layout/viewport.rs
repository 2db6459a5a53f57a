// Framing: union of every node's footprint, then a uniform margin.

use super::{PointF, RectF, SizeF};

pub(super) fn compute_viewport(positions: &[PointF], footprints: &[SizeF], padding: f64) -> RectF {
    let mut bb: Option<RectF> = None;
    for (center, size) in positions.iter().zip(footprints) {
        let r = RectF::centered(*center, *size);
        bb = Some(match bb {
            Some(acc) => acc.union(&r),
            None => r,
        });
    }
    bb.unwrap_or(RectF { x: 0.0, y: 0.0, w: 0.0, h: 0.0 }).inflate(padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_nodes() {
        let positions = [PointF { x: 0.0, y: 0.0 }, PointF { x: 300.0, y: -100.0 }];
        let sizes = [SizeF { w: 160.0, h: 80.0 }, SizeF { w: 200.0, h: 100.0 }];
        let vp = compute_viewport(&positions, &sizes, 10.0);
        assert_eq!(vp, RectF { x: -90.0, y: -160.0, w: 500.0, h: 210.0 });
    }

    #[test]
    fn test_empty_is_just_padding() {
        let vp = compute_viewport(&[], &[], 5.0);
        assert_eq!(vp, RectF { x: -5.0, y: -5.0, w: 10.0, h: 10.0 });
    }
}
