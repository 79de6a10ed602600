//! Andrew's monotone chain, the second solver behind `HullSolver`.
//!
//! Used as an independent oracle for the divide-and-conquer solver and
//! selectable from the CLI. Output follows the same contract: distinct
//! vertices, clockwise, collinear points dropped.

use super::error::HullResult;
use super::solve::{canonical_points, HullSolver};
use super::types::{Hull, Point};
use crate::orient2d as turn;

#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneChain;

impl HullSolver for MonotoneChain {
    fn name(&self) -> &'static str {
        "monotone-chain"
    }
    fn solve(&self, points: &[Point]) -> HullResult<Hull> {
        let pts = canonical_points(points)?;
        Ok(Hull::new(monotone_chain(&pts)))
    }
}

/// Hull of lexicographically sorted, distinct points, clockwise from the
/// smallest point.
fn monotone_chain(sorted: &[Point]) -> Vec<Point> {
    if sorted.len() <= 2 {
        return sorted.to_vec();
    }
    // Clockwise from the leftmost point: upper chain left to right, then
    // lower chain right to left.
    let mut hull = half_chain(sorted.iter().copied(), sorted.len());
    let lower = half_chain(sorted.iter().rev().copied(), sorted.len());
    hull.pop();
    hull.extend_from_slice(&lower[..lower.len() - 1]);
    hull
}

/// One chain of the hull; pops on anything that is not a right turn.
fn half_chain(points: impl Iterator<Item = Point>, cap: usize) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for p in points {
        while let [.., a, b] = chain[..] {
            if turn(a, b, p) < 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
