//! Partitioner and recursive divide-and-conquer driver.
//!
//! Input is canonicalized once at the entry point (finite check, `-0.0`
//! folded into `0.0`, lexicographic sort, exact duplicates dropped). The
//! recursion then only ever sees distinct points, so every hull vertex is
//! unique and a left/right pair sharing an x always has the left point below.

use std::cmp::Ordering;

use super::error::{HullError, HullResult, InvariantViolation};
use super::merge::merge_hulls;
use super::observe::{MergeObserver, MergeStep, NoopObserver};
use super::types::{Hull, HullCfg, Point, Side};

/// Common contract of the hull algorithms: clockwise hull of distinct
/// input points, deterministic for a given input multiset.
pub trait HullSolver {
    fn name(&self) -> &'static str;
    fn solve(&self, points: &[Point]) -> HullResult<Hull>;
}

/// Divide-and-conquer solver (tangent merge).
#[derive(Clone, Copy, Debug, Default)]
pub struct DivideAndConquer {
    pub cfg: HullCfg,
}

impl HullSolver for DivideAndConquer {
    fn name(&self) -> &'static str {
        "divide-and-conquer"
    }
    fn solve(&self, points: &[Point]) -> HullResult<Hull> {
        compute_hull_with(points, &self.cfg, &NoopObserver)
    }
}

/// Convex hull with default settings.
pub fn compute_hull(points: &[Point]) -> HullResult<Hull> {
    compute_hull_with(points, &HullCfg::default(), &NoopObserver)
}

/// Convex hull with explicit config; `observer` sees every merge.
pub fn compute_hull_with<O>(points: &[Point], cfg: &HullCfg, observer: &O) -> HullResult<Hull>
where
    O: MergeObserver + ?Sized,
{
    let distinct = canonical_points(points)?;
    tracing::debug!(
        points = points.len(),
        distinct = distinct.len(),
        parallel_cutoff = ?cfg.parallel_cutoff,
        "compute_hull"
    );
    let verts = solve(distinct, 0, cfg, observer)?;
    tracing::debug!(vertices = verts.len(), "hull done");
    Ok(Hull::new(verts))
}

/// Lexicographic `(x, y)` order; total on finite coordinates.
#[inline]
pub(crate) fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Finite check, fold `-0.0`, sort, dedup.
pub(crate) fn canonical_points(points: &[Point]) -> HullResult<Vec<Point>> {
    let mut pts = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(HullError::NonFinitePoint { index });
        }
        // -0.0 + 0.0 == +0.0; keeps total_cmp and == in agreement
        pts.push(Point::new(p.x + 0.0, p.y + 0.0));
    }
    pts.sort_by(lex_cmp);
    pts.dedup();
    Ok(pts)
}

/// Sort by x (ties by y, stable) and split at `len / 2`; the left half is
/// the smaller one when the length is odd.
pub fn partition(points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let mut sorted = points.to_vec();
    sorted.sort_by(lex_cmp);
    split_sorted(sorted)
}

/// `partition` for input that is already in lexicographic order. The
/// recursion sorts once at the entry point and both halves stay sorted.
fn split_sorted(mut sorted: Vec<Point>) -> (Vec<Point>, Vec<Point>) {
    debug_assert!(sorted
        .windows(2)
        .all(|w| lex_cmp(&w[0], &w[1]) != Ordering::Greater));
    let right = sorted.split_off(sorted.len() / 2);
    (sorted, right)
}

fn solve<O>(points: Vec<Point>, depth: usize, cfg: &HullCfg, observer: &O) -> HullResult<Vec<Point>>
where
    O: MergeObserver + ?Sized,
{
    if points.len() <= 1 {
        return Ok(points);
    }
    let n = points.len();
    let (left, right) = split_sorted(points);
    let (left, right) = match cfg.parallel_cutoff {
        Some(cutoff) if n >= cutoff => rayon::join(
            || solve(left, depth + 1, cfg, observer),
            || solve(right, depth + 1, cfg, observer),
        ),
        _ => (
            solve(left, depth + 1, cfg, observer),
            solve(right, depth + 1, cfg, observer),
        ),
    };
    let (left, right) = (left?, right?);
    if left.is_empty() {
        return Err(InvariantViolation::EmptySubHull { side: Side::Left }.into());
    }
    if right.is_empty() {
        return Err(InvariantViolation::EmptySubHull { side: Side::Right }.into());
    }
    let merged = merge_hulls(&left, &right)?;
    observer.on_merge(&MergeStep {
        depth,
        left: &left,
        right: &right,
        upper: merged.upper,
        lower: merged.lower,
        merged: merged.hull.vertices(),
    });
    Ok(merged.hull.into_vec())
}
