//! Divide-and-conquer convex hull in the plane.
//!
//! Purpose
//! - Compute the clockwise convex hull of a finite point set by splitting at
//!   the median x, solving both halves, and merging them along an upper and a
//!   lower tangent.
//! - Keep every stage separately testable: partition (`solve`), tangent walk
//!   (`tangent` over `view`), splice (`splice`), and the merge that ties them
//!   together (`merge`).
//!
//! Conventions
//! - y-up frame; "clockwise" means the signed (shoelace) area is negative.
//! - Input is canonicalized once: non-finite coordinates are rejected,
//!   `-0.0` becomes `0.0`, exact duplicates are dropped.
//! - Collinear points are never hull vertices; a collinear input yields its
//!   two extreme points.
//!
//! References
//! - Preparata & Hong, "Convex hulls of finite sets of points in two and
//!   three dimensions" (1977), for the merge-by-tangents scheme.
//! - Code cross-refs: `compute_hull`, `merge_hulls`, `find_tangent`, `splice`,
//!   `MonotoneChain` (reference solver), `check::verify`.

pub mod check;
mod error;
mod merge;
mod monotone;
mod observe;
pub mod rand;
mod slope;
mod solve;
mod splice;
mod tangent;
mod types;
mod view;

pub use error::{HullError, HullResult, InvariantViolation};
pub use merge::{merge_hulls, Merged};
pub use monotone::MonotoneChain;
pub use observe::{MergeObserver, MergeStep, NoopObserver, TracingObserver};
pub use slope::{overshoots, slope};
pub use solve::{compute_hull, compute_hull_with, partition, DivideAndConquer, HullSolver};
pub use splice::splice;
pub use tangent::{find_tangent, is_tangent};
pub use types::{Hull, HullCfg, Point, Side, Tangent, TangentKind};
pub use view::{max_x_index, min_x_index, HullView, Orientation};
