//! Planar convex hulls by divide and conquer.
//!
//! The entry point is [`hull::compute_hull`]; [`hull::MonotoneChain`] is an
//! independent solver behind the same [`hull::HullSolver`] trait and serves
//! as the reference in tests and the CLI `compare` command.
//!
//! API Policy
//! - The crate is consumed by the workspace CLI and the Python bindings. No
//!   stability promise beyond that; prefer clearer names over compatibility.

pub mod api;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compute_hull, Hull, HullCfg, HullError, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::hull::{
        compute_hull, compute_hull_with, DivideAndConquer, Hull, HullCfg, HullError, HullSolver,
        MonotoneChain, Point,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Twice the signed area of the triangle `o, a, b`: positive for a
/// counter-clockwise turn, negative for clockwise, zero when collinear.
#[inline]
pub fn orient2d(o: Point, a: Point, b: Point) -> f64 {
    let (oa, ob) = (a - o, b - o);
    oa.x * ob.y - oa.y * ob.x
}
