//! Hull extractor: join two clockwise hulls along their tangents.

use super::error::{HullResult, InvariantViolation};
use super::types::{Point, Side, Tangent};

/// Merged boundary: the clockwise run of `left` from `lower.left` through
/// `upper.left`, then the clockwise run of `right` from `upper.right`
/// through `lower.right`. The result is clockwise and starts at the left
/// endpoint of the lower tangent.
pub fn splice(
    left: &[Point],
    right: &[Point],
    upper: &Tangent,
    lower: &Tangent,
) -> HullResult<Vec<Point>> {
    for t in [upper, lower] {
        check_index(t, Side::Left, t.left, left.len())?;
        check_index(t, Side::Right, t.right, right.len())?;
    }
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend(clockwise_run(left, lower.left, upper.left));
    out.extend(clockwise_run(right, upper.right, lower.right));
    Ok(out)
}

fn check_index(t: &Tangent, side: Side, index: usize, len: usize) -> HullResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(InvariantViolation::TangentOutOfRange {
            kind: t.kind,
            side,
            index,
            len,
        }
        .into())
    }
}

/// `verts[from], verts[from + 1], …, verts[to]`, wrapping around the end.
fn clockwise_run(verts: &[Point], from: usize, to: usize) -> impl Iterator<Item = Point> + '_ {
    let n = verts.len();
    let steps = (to + n - from) % n;
    (0..=steps).map(move |k| verts[(from + k) % n])
}
