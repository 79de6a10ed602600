//! Orientation normalizer: cyclic views over a clockwise vertex list.
//!
//! A view is a start index plus a walking direction over a borrowed slice,
//! so rotating or reversing a hull never copies vertices. Index `i` of a
//! view maps back to the slice through `backing_index`, which is what the
//! tangent search hands to the splice step.

use super::types::Point;

/// Walking direction of a view over a clockwise slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

#[derive(Clone, Copy, Debug)]
pub struct HullView<'a> {
    verts: &'a [Point],
    start: usize,
    orientation: Orientation,
}

impl<'a> HullView<'a> {
    /// Clockwise view starting at `verts[start]`.
    ///
    /// `start` is reduced modulo the length; an empty slice gives an empty view.
    pub fn clockwise_from(verts: &'a [Point], start: usize) -> Self {
        let start = if verts.is_empty() { 0 } else { start % verts.len() };
        Self {
            verts,
            start,
            orientation: Orientation::Clockwise,
        }
    }

    /// Same vertices, opposite direction; element 0 stays in place.
    #[inline]
    pub fn reversed(self) -> Self {
        let orientation = match self.orientation {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        };
        Self {
            orientation,
            ..self
        }
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
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Slice index of view position `i` (taken modulo the length).
    #[inline]
    pub fn backing_index(&self, i: usize) -> usize {
        let n = self.verts.len();
        let i = i % n;
        match self.orientation {
            Orientation::Clockwise => (self.start + i) % n,
            Orientation::CounterClockwise => (self.start + n - i) % n,
        }
    }

    /// Vertex at view position `i`. Panics on an empty view.
    #[inline]
    pub fn get(&self, i: usize) -> Point {
        self.verts[self.backing_index(i)]
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }
}

/// Index of the vertex with the largest x; ties go to the first occurrence.
pub fn max_x_index(verts: &[Point]) -> Option<usize> {
    extreme_x_index(verts, |cand, best| cand > best)
}

/// Index of the vertex with the smallest x; ties go to the first occurrence.
pub fn min_x_index(verts: &[Point]) -> Option<usize> {
    extreme_x_index(verts, |cand, best| cand < best)
}

fn extreme_x_index(verts: &[Point], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in verts.iter().enumerate() {
        match best {
            Some(b) if !better(p.x, verts[b].x) => {}
            _ => best = Some(i),
        }
    }
    best
}
