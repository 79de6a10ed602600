//! Random point clouds for tests, benchmarks and the CLI.
//!
//! Purpose
//! - Reproducible inputs: a `(seed, index)` replay token fully determines a
//!   cloud, so a failing case can be re-drawn from two integers.
//! - A few shapes that stress different parts of the merge: disks (few hull
//!   vertices), rings (almost every point on the hull), integer grids (ties,
//!   duplicates, collinear runs).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Largest usable `scale`: keeps `2·scale` and `scale²` finite.
pub const MAX_SCALE: f64 = 1e150;

/// Distribution of the sampled points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in the disk of radius `scale`.
    Disk,
    /// Uniform in the axis-aligned square `[-scale, scale]²`.
    Square,
    /// Uniform angle, radius in `[(1 - thickness)·scale, scale]`.
    Ring { thickness: f64 },
    /// Integer lattice points in `[-scale, scale]²` (drawn with repetition).
    Grid,
}

#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
    pub scale: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: CloudShape::Disk,
            scale: 1.0,
        }
    }
}

/// Replay token: same token, same cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        // splitmix64 finalizer over seed and index
        fn mix(mut z: u64) -> u64 {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            z ^ (z >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed.rotate_left(32) ^ mix(self.index)))
    }
}

/// Draw `cfg.count` points. `|scale|` is clamped to
/// `[f64::MIN_POSITIVE, MAX_SCALE]`; a NaN scale counts as 1.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let s = if cfg.scale.is_nan() { 1.0 } else { cfg.scale.abs() };
    let s = s.clamp(f64::MIN_POSITIVE, MAX_SCALE);
    (0..cfg.count)
        .map(|_| match cfg.shape {
            CloudShape::Disk => polar(&mut rng, 0.0, s),
            CloudShape::Ring { thickness } => {
                polar(&mut rng, (1.0 - thickness.clamp(0.0, 1.0)) * s, s)
            }
            CloudShape::Square => Vector2::new(rng.gen_range(-s..=s), rng.gen_range(-s..=s)),
            CloudShape::Grid => {
                // lattice coordinates stay exact in f64
                let k = s.floor().clamp(1.0, (1u64 << 52) as f64) as i64;
                Vector2::new(rng.gen_range(-k..=k) as f64, rng.gen_range(-k..=k) as f64)
            }
        })
        .collect()
}

/// Uniform by area in the annulus `r_min ≤ r ≤ r_max`.
fn polar<R: Rng>(rng: &mut R, r_min: f64, r_max: f64) -> Point {
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let (a, b) = (r_min * r_min, r_max * r_max);
    let r = (a + rng.gen::<f64>() * (b - a)).sqrt();
    Vector2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = CloudCfg {
            count: 64,
            ..CloudCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_cloud(cfg, tok), draw_cloud(cfg, tok));
        assert_ne!(
            draw_cloud(cfg, tok),
            draw_cloud(cfg, ReplayToken { seed: 42, index: 8 })
        );
    }

    #[test]
    fn shapes_respect_bounds() {
        let tok = ReplayToken { seed: 3, index: 0 };
        let ring = draw_cloud(
            CloudCfg {
                count: 200,
                shape: CloudShape::Ring { thickness: 0.1 },
                scale: 2.0,
            },
            tok,
        );
        assert!(ring
            .iter()
            .all(|p| p.norm() >= 1.8 - 1e-12 && p.norm() <= 2.0 + 1e-12));

        let grid = draw_cloud(
            CloudCfg {
                count: 200,
                shape: CloudShape::Grid,
                scale: 3.0,
            },
            tok,
        );
        assert!(grid.iter().all(|p| {
            p.x.fract() == 0.0 && p.y.fract() == 0.0 && p.x.abs() <= 3.0 && p.y.abs() <= 3.0
        }));
    }

    #[test]
    fn huge_and_infinite_scales_stay_finite() {
        let tok = ReplayToken { seed: 5, index: 2 };
        let shapes = [
            CloudShape::Disk,
            CloudShape::Square,
            CloudShape::Ring { thickness: 0.5 },
            CloudShape::Grid,
        ];
        for shape in shapes {
            for scale in [1e308, f64::MAX, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
                let cfg = CloudCfg {
                    count: 16,
                    shape,
                    scale,
                };
                let cloud = draw_cloud(cfg, tok);
                assert_eq!(cloud.len(), 16);
                assert!(
                    cloud.iter().all(|p| p.x.is_finite() && p.y.is_finite()),
                    "{shape:?} scale={scale}"
                );
            }
        }
    }
}
