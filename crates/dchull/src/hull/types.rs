//! Core value types shared by the merge pipeline.
//!
//! - `Point`: plain `nalgebra` 2-vector; equality is by value.
//! - `Hull`: distinct vertices in clockwise order (y-up frame).
//! - `TangentKind`, `Side`, `Tangent`: the tangent search vocabulary.
//! - `HullCfg`: knobs for the solver and the post-hoc checks.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use super::error::HullError;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Convex hull as an ordered cyclic vertex list.
///
/// Invariants (for hulls produced by this crate):
/// - Vertices are distinct and clockwise.
/// - No vertex is strictly inside the polygon of the others; collinear
///   vertices are not retained.
/// - Length 1 is a single point, length 2 a segment (lexicographically
///   smaller endpoint first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub verts: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn new(verts: Vec<Point>) -> Self {
        Self { verts }
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.verts
    }

    /// Shoelace area; negative for clockwise hulls, zero for fewer than 3 vertices.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        super::check::signed_area(&self.verts)
    }

    /// Inside-or-on-boundary test with slack `eps` (see `check::encloses`).
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        super::check::encloses(&self.verts, p, eps)
    }
}

/// Which of the two tangent lines joining a left and a right hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TangentKind {
    /// Every vertex of both hulls lies on or below the line.
    Upper,
    /// Every vertex of both hulls lies on or above the line.
    Lower,
}

impl fmt::Display for TangentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TangentKind::Upper => f.write_str("upper"),
            TangentKind::Lower => f.write_str("lower"),
        }
    }
}

impl FromStr for TangentKind {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(TangentKind::Upper),
            "lower" => Ok(TangentKind::Lower),
            other => Err(HullError::InvalidArgument {
                reason: format!("tangent kind must be 'upper' or 'lower', got {other:?}"),
            }),
        }
    }
}

/// Side of the x-split a hull belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Tangent line between a left and a right hull.
///
/// `left`/`right` index the *clockwise* vertex lists of the two hulls, so the
/// splice step never has to search for a point by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tangent {
    pub kind: TangentKind,
    pub left: usize,
    pub right: usize,
}

impl Tangent {
    /// Endpoints as points; `None` if an index is out of range.
    pub fn endpoints(&self, left: &[Point], right: &[Point]) -> Option<(Point, Point)> {
        Some((*left.get(self.left)?, *right.get(self.right)?))
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Run the two recursive solves through `rayon::join` once a sub-problem
    /// has at least this many points. `None` stays on the calling thread.
    pub parallel_cutoff: Option<usize>,
    /// Slack for the `check` predicates (cross products and area).
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            parallel_cutoff: None,
            eps: 1e-9,
        }
    }
}
