//! Curated surface for the CLI and the Python bindings (UNSTABLE).
//!
//! Prefer these re-exports over reaching into `hull::*` so callers agree on
//! names; breaking changes are allowed.

// Solvers
pub use crate::hull::{
    compute_hull, compute_hull_with, DivideAndConquer, HullCfg, HullSolver, MonotoneChain,
};
// Values and errors
pub use crate::hull::{Hull, HullError, HullResult, Point, TangentKind};
// Merge internals, for observers and visualisation
pub use crate::hull::{merge_hulls, MergeObserver, MergeStep, Merged, Tangent, TracingObserver};
// Validation
pub use crate::hull::check::{verify, Violation};
// Random clouds
pub use crate::hull::rand::{
    draw_cloud, CloudCfg, CloudShape, ReplayToken as CloudReplay, MAX_SCALE,
};
