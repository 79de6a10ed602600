//! Post-hoc validation of a hull against its input.
//!
//! Everything here is O(n·h) and meant for tests, the CLI `--verify` flag,
//! and observers; the solvers never call it.

use thiserror::Error;

use super::types::{Hull, Point};
use crate::orient2d as cross;

/// First postcondition a hull failed.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    #[error("hull vertex #{index} is not one of the input points")]
    NotASubset { index: usize },
    #[error("hull vertex #{index} appears more than once")]
    Duplicate { index: usize },
    #[error("hull turns counter-clockwise at vertex #{index}")]
    NotClockwiseConvex { index: usize },
    #[error("input point #{index} lies outside the hull")]
    Outside { index: usize },
    #[error("hull is empty but the input is not")]
    Empty,
}

/// Shoelace area of the closed polygon `verts` (negative when clockwise).
pub fn signed_area(verts: &[Point]) -> f64 {
    let n = verts.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let (p, q) = (verts[i], verts[(i + 1) % n]);
            p.x * q.y - q.x * p.y
        })
        .sum();
    0.5 * twice
}

/// Index of the first vertex where the boundary does not turn clockwise
/// (cross product above `eps`), if any. Polygons with fewer than 3 vertices
/// trivially pass.
pub fn first_bad_turn(verts: &[Point], eps: f64) -> Option<usize> {
    let n = verts.len();
    if n < 3 {
        return None;
    }
    (0..n).find(|&i| cross(verts[(i + n - 1) % n], verts[i], verts[(i + 1) % n]) > eps)
}

/// Clockwise and convex: every turn is clockwise (within `eps`) and the
/// enclosed area is negative. The area check rejects boundaries that wind
/// around more than once.
pub fn is_clockwise_convex(verts: &[Point], eps: f64) -> bool {
    if verts.len() < 3 {
        return true;
    }
    first_bad_turn(verts, eps).is_none() && signed_area(verts) < 0.0
}

/// Inside-or-on-boundary test against a clockwise convex polygon.
///
/// Degenerate hulls: empty contains nothing, a point contains itself, a
/// segment contains the points on it (all within `eps`).
pub fn encloses(verts: &[Point], p: Point, eps: f64) -> bool {
    match verts.len() {
        0 => false,
        1 => (p - verts[0]).norm() <= eps,
        2 => {
            let (a, b) = (verts[0], verts[1]);
            let ab = b - a;
            let t = (p - a).dot(&ab);
            cross(a, b, p).abs() <= eps * ab.norm().max(1.0)
                && t >= -eps
                && t <= ab.norm_squared() + eps
        }
        n => (0..n).all(|i| cross(verts[i], verts[(i + 1) % n], p) <= eps),
    }
}

/// Check `hull` against `points`: subset, distinct, clockwise convex, encloses all.
pub fn verify(points: &[Point], hull: &Hull, eps: f64) -> Result<(), Violation> {
    let verts = hull.vertices();
    if verts.is_empty() {
        return if points.is_empty() {
            Ok(())
        } else {
            Err(Violation::Empty)
        };
    }
    for (index, v) in verts.iter().enumerate() {
        if !points.contains(v) {
            return Err(Violation::NotASubset { index });
        }
        if verts[..index].contains(v) {
            return Err(Violation::Duplicate { index });
        }
    }
    if let Some(index) = first_bad_turn(verts, eps) {
        return Err(Violation::NotClockwiseConvex { index });
    }
    if verts.len() >= 3 && hull.signed_area() >= 0.0 {
        return Err(Violation::NotClockwiseConvex { index: 0 });
    }
    if let Some(index) = points.iter().position(|p| !hull.contains_eps(*p, eps)) {
        return Err(Violation::Outside { index });
    }
    Ok(())
}
