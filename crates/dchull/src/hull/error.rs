use thiserror::Error;

use super::types::{Side, TangentKind};

/// Errors returned by the hull solvers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Caller passed something the API does not accept (programming error).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("point #{index} has a non-finite coordinate")]
    NonFinitePoint { index: usize },

    /// The divide-and-conquer preconditions were broken; the result would be
    /// geometrically meaningless, so the call is aborted.
    #[error("internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl HullError {
    /// True for bugs inside the solver, as opposed to bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, HullError::Invariant(_))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("{side} sub-hull is empty at merge time")]
    EmptySubHull { side: Side },

    #[error("{kind} tangent index {index} is outside the {side} hull (len {len})")]
    TangentOutOfRange {
        kind: TangentKind,
        side: Side,
        index: usize,
        len: usize,
    },
}

pub type HullResult<T> = Result<T, HullError>;
