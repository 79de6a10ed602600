//! Merger: anchor both hulls at their facing extremes, find the two
//! tangents, splice.

use super::error::{HullResult, InvariantViolation};
use super::splice::splice;
use super::tangent::find_tangent;
use super::types::{Hull, Point, Side, Tangent, TangentKind};
use super::view::{max_x_index, min_x_index, HullView};

/// Result of one merge; tangent indices refer to the input slices.
#[derive(Clone, Debug, PartialEq)]
pub struct Merged {
    pub hull: Hull,
    pub upper: Tangent,
    pub lower: Tangent,
}

/// Merge two clockwise hulls separated by the x-split (`left` entirely
/// lexicographically before `right`).
pub fn merge_hulls(left: &[Point], right: &[Point]) -> HullResult<Merged> {
    let l_start = max_x_index(left).ok_or(InvariantViolation::EmptySubHull { side: Side::Left })?;
    let r_start =
        min_x_index(right).ok_or(InvariantViolation::EmptySubHull { side: Side::Right })?;
    let l_cw = HullView::clockwise_from(left, l_start);
    let r_cw = HullView::clockwise_from(right, r_start);

    let upper = find_tangent(&l_cw.reversed(), &r_cw, TangentKind::Upper);
    let lower = find_tangent(&l_cw, &r_cw.reversed(), TangentKind::Lower);
    let verts = splice(left, right, &upper, &lower)?;
    Ok(Merged {
        hull: Hull::new(verts),
        upper,
        lower,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::error::HullError;
    use nalgebra::vector;

    #[test]
    fn empty_side_is_rejected() {
        let one = vec![vector![0.0, 0.0]];
        let err = merge_hulls(&[], &one).unwrap_err();
        assert_eq!(
            err,
            HullError::Invariant(InvariantViolation::EmptySubHull { side: Side::Left })
        );
        let err = merge_hulls(&one, &[]).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn point_and_segment() {
        // (0,0) with the segment (1,-1)-(1,1): clockwise triangle
        let left = vec![vector![0.0, 0.0]];
        let right = vec![vector![1.0, -1.0], vector![1.0, 1.0]];
        let m = merge_hulls(&left, &right).unwrap();
        assert_eq!(
            m.hull.verts,
            vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![1.0, -1.0]]
        );
        assert_eq!((m.upper.left, m.upper.right), (0, 1));
        assert_eq!((m.lower.left, m.lower.right), (0, 0));
        assert!(m.hull.signed_area() < 0.0);
    }
}
