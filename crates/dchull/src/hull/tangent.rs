//! Tangent finder: rotating-line walk between two separated hulls.
//!
//! Views and their pairing (see `merge::merge_hulls`):
//! - Upper: left hull counter-clockwise from its max-x vertex, right hull
//!   clockwise from its min-x vertex. Both walk upward, away from the seam.
//! - Lower: the mirrored pairing, both walk downward.
//!
//! Each pass first advances the left endpoint as far as the stop table in
//! `slope::overshoots` allows, then the right one. The walk ends after a
//! pass in which neither endpoint moved. Indices only grow, so it always
//! terminates.
//!
//! Collinear candidates (slope equal to the current line) need care. A
//! candidate farther from the fixed endpoint is taken. A nearer one
//! is crossed only when the first vertex past the collinear run is itself an
//! accepted step. Otherwise a vertical two-point sub-hull at the seam can
//! walk the endpoint past the vertex that a later rotation of the other side
//! needs.

use super::slope::{overshoots, slope};
use super::types::{Point, Side, Tangent, TangentKind};
use super::view::HullView;

/// Walk both views to the `kind` tangent; indices in the result refer to
/// the views' backing (clockwise) slices.
///
/// Pre: both views are non-empty, the left hull lies lexicographically
/// before the right hull, and the views follow the pairing above.
pub fn find_tangent(left: &HullView<'_>, right: &HullView<'_>, kind: TangentKind) -> Tangent {
    let mut li = 0usize;
    let mut ri = 0usize;
    let mut cur = slope(left.get(0), right.get(0));
    loop {
        let moved_left = rotate(left, Side::Left, right.get(ri), kind, &mut li, &mut cur);
        let moved_right = rotate(right, Side::Right, left.get(li), kind, &mut ri, &mut cur);
        if !(moved_left || moved_right) {
            break;
        }
    }
    Tangent {
        kind,
        left: left.backing_index(li),
        right: right.backing_index(ri),
    }
}

/// Advance `idx` along `view` while the line to `pivot` keeps turning toward
/// the tangent. Returns whether the endpoint moved.
fn rotate(
    view: &HullView<'_>,
    side: Side,
    pivot: Point,
    kind: TangentKind,
    idx: &mut usize,
    cur: &mut f64,
) -> bool {
    let line_slope = |p: Point| match side {
        Side::Left => slope(p, pivot),
        Side::Right => slope(pivot, p),
    };
    let start = *idx;
    let mut i = start + 1;
    while i < view.len() {
        let cand = view.get(i);
        let s = line_slope(cand);
        if overshoots(kind, side, s, *cur) {
            break;
        }
        if s == *cur && (cand - pivot).norm_squared() <= (view.get(*idx) - pivot).norm_squared() {
            let past = (i + 1..view.len()).find(|&j| line_slope(view.get(j)) != *cur);
            match past {
                Some(j) if !overshoots(kind, side, line_slope(view.get(j)), *cur) => {
                    *cur = line_slope(view.get(j));
                    *idx = j;
                    i = j + 1;
                    continue;
                }
                _ => break,
            }
        }
        *cur = s;
        *idx = i;
        i += 1;
    }
    *idx != start
}

/// Whether no point of `points` lies strictly on the outer side of the line
/// `a → b` (above for `Upper`, below for `Lower`), with slack `eps`.
///
/// `a` must come lexicographically before `b`; for a vertical line "above"
/// means to its left.
pub fn is_tangent(kind: TangentKind, a: Point, b: Point, points: &[Point], eps: f64) -> bool {
    let d = b - a;
    points.iter().all(|p| {
        let w = p - a;
        let cross = d.x * w.y - d.y * w.x;
        match kind {
            TangentKind::Upper => cross <= eps,
            TangentKind::Lower => cross >= -eps,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::view::{max_x_index, min_x_index};
    use nalgebra::vector;

    fn tangent_points(left: &[Point], right: &[Point], kind: TangentKind) -> (Point, Point) {
        let l = HullView::clockwise_from(left, max_x_index(left).unwrap());
        let r = HullView::clockwise_from(right, min_x_index(right).unwrap());
        let t = match kind {
            TangentKind::Upper => find_tangent(&l.reversed(), &r, kind),
            TangentKind::Lower => find_tangent(&l, &r.reversed(), kind),
        };
        (left[t.left], right[t.right])
    }

    #[test]
    fn two_triangles() {
        // both clockwise
        let left = vec![vector![0.0, 0.0], vector![0.0, 2.0], vector![1.0, 1.0]];
        let right = vec![vector![3.0, 0.0], vector![3.0, 2.0], vector![4.0, 1.0]];
        assert_eq!(
            tangent_points(&left, &right, TangentKind::Upper),
            (vector![0.0, 2.0], vector![3.0, 2.0])
        );
        assert_eq!(
            tangent_points(&left, &right, TangentKind::Lower),
            (vector![0.0, 0.0], vector![3.0, 0.0])
        );
    }

    #[test]
    fn single_points() {
        let left = vec![vector![0.0, 0.0]];
        let right = vec![vector![1.0, 1.0]];
        for kind in [TangentKind::Upper, TangentKind::Lower] {
            assert_eq!(tangent_points(&left, &right, kind), (left[0], right[0]));
        }
    }

    #[test]
    fn vertical_pair_at_the_seam() {
        // Left is the vertical segment (-1,-1)-(-1,0); right starts right above it.
        let left = vec![vector![-1.0, -1.0], vector![-1.0, 0.0]];
        let right = vec![vector![-1.0, 1.0], vector![1.0, -1.0]];
        let (l, r) = tangent_points(&left, &right, TangentKind::Lower);
        assert_eq!((l, r), (vector![-1.0, -1.0], vector![1.0, -1.0]));
        let mut all = left.clone();
        all.extend(&right);
        assert!(is_tangent(TangentKind::Lower, l, r, &all, 0.0));
    }

    #[test]
    fn walks_through_a_vertical_edge() {
        // Left hull has a vertical right edge x = -3; the upper tangent must
        // climb that edge and continue to (-4, 4).
        let left = vec![vector![-3.0, -3.0], vector![-4.0, 4.0], vector![-3.0, 1.0]];
        let right = vec![vector![-3.0, 5.0], vector![0.0, 0.0], vector![-1.0, -3.0]];
        let (l, r) = tangent_points(&left, &right, TangentKind::Upper);
        assert_eq!((l, r), (vector![-4.0, 4.0], vector![-3.0, 5.0]));
        let (l, r) = tangent_points(&left, &right, TangentKind::Lower);
        assert_eq!((l, r), (vector![-3.0, -3.0], vector![-1.0, -3.0]));
    }

    #[test]
    fn is_tangent_detects_points_above() {
        let pts = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 0.0]];
        assert!(!is_tangent(TangentKind::Upper, pts[0], pts[2], &pts, 0.0));
        assert!(is_tangent(TangentKind::Lower, pts[0], pts[2], &pts, 0.0));
        assert!(is_tangent(TangentKind::Upper, pts[0], pts[1], &pts, 0.0));
    }
}
