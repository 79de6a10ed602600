//! Read-only hooks into the recursion (debugging, plotting, tests).

use super::types::{Point, Tangent};

/// One merge as seen by an observer. Tangent indices refer to `left`/`right`.
#[derive(Clone, Copy, Debug)]
pub struct MergeStep<'a> {
    /// Recursion depth of the merge (0 = final merge).
    pub depth: usize,
    pub left: &'a [Point],
    pub right: &'a [Point],
    pub upper: Tangent,
    pub lower: Tangent,
    pub merged: &'a [Point],
}

/// Receives every merge. `Sync` because the parallel solver calls it from
/// rayon workers; merges at different depths may arrive in any order.
pub trait MergeObserver: Sync {
    fn on_merge(&self, step: &MergeStep<'_>);
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {
    #[inline]
    fn on_merge(&self, _step: &MergeStep<'_>) {}
}

/// Emits one `trace` event per merge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl MergeObserver for TracingObserver {
    fn on_merge(&self, step: &MergeStep<'_>) {
        tracing::trace!(
            depth = step.depth,
            left = step.left.len(),
            right = step.right.len(),
            merged = step.merged.len(),
            upper = ?(step.upper.left, step.upper.right),
            lower = ?(step.lower.left, step.lower.right),
            "merge"
        );
    }
}

impl<F> MergeObserver for F
where
    F: Fn(&MergeStep<'_>) + Sync,
{
    fn on_merge(&self, step: &MergeStep<'_>) {
        self(step)
    }
}
