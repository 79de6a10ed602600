//! Slope and tangency predicates used by the tangent walk.

use super::types::{Point, Side, TangentKind};

/// Slope of the segment `a → b`; a vertical segment has slope `+∞`.
///
/// Callers always pass the left-hull endpoint first. Because the partition
/// breaks x-ties by y, a vertical segment between the two halves points
/// upward, which is what `+∞` stands for.
#[inline]
pub fn slope(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    if dx == 0.0 {
        f64::INFINITY
    } else {
        (b.y - a.y) / dx
    }
}

/// Whether moving the `side` endpoint to a line of slope `new` would rotate
/// past the `kind` tangent, given the current line slope `cur`.
///
/// | kind  | left          | right         |
/// |-------|---------------|---------------|
/// | Upper | `new > cur`   | `new < cur`   |
/// | Lower | `new < cur`   | `new > cur`   |
#[inline]
pub fn overshoots(kind: TangentKind, side: Side, new: f64, cur: f64) -> bool {
    match (kind, side) {
        (TangentKind::Upper, Side::Left) | (TangentKind::Lower, Side::Right) => new > cur,
        (TangentKind::Upper, Side::Right) | (TangentKind::Lower, Side::Left) => new < cur,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn slope_finite_and_vertical() {
        assert_eq!(slope(vector![0.0, 0.0], vector![2.0, 1.0]), 0.5);
        assert_eq!(slope(vector![1.0, 3.0], vector![0.0, 1.0]), 2.0);
        assert_eq!(slope(vector![1.0, 0.0], vector![1.0, 5.0]), f64::INFINITY);
        // Anything finite compares below a vertical line.
        assert!(slope(vector![0.0, 0.0], vector![1.0, 1e12]) < f64::INFINITY);
    }

    #[test]
    fn overshoot_table() {
        use Side::*;
        use TangentKind::*;
        assert!(overshoots(Upper, Left, 1.0, 0.0));
        assert!(!overshoots(Upper, Left, 0.0, 0.0));
        assert!(overshoots(Upper, Right, -1.0, 0.0));
        assert!(!overshoots(Upper, Right, 1.0, 0.0));
        assert!(overshoots(Lower, Left, -1.0, 0.0));
        assert!(!overshoots(Lower, Left, 1.0, 0.0));
        assert!(overshoots(Lower, Right, 1.0, 0.0));
        assert!(!overshoots(Lower, Right, f64::INFINITY, f64::INFINITY));
    }
}
