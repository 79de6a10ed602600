//! Print hulls of a few random clouds, with vertex counts and the merge trace.
//!
//! Usage:
//!   cargo run -p dchull --example hull_demo -- disk
//!   cargo run -p dchull --example hull_demo -- ring
//!   cargo run -p dchull --example hull_demo -- grid
//!
//! Each sample prints n, the hull size for both solvers, and whether the
//! divide-and-conquer result passes `check::verify`.

use dchull::hull::check::verify;
use dchull::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::hull::{compute_hull_with, HullCfg, HullSolver, MergeStep, MonotoneChain};
use std::sync::atomic::{AtomicUsize, Ordering};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let shape = match mode.as_str() {
        "disk" => CloudShape::Disk,
        "ring" => CloudShape::Ring { thickness: 0.05 },
        "grid" => CloudShape::Grid,
        _ => {
            eprintln!("usage: hull_demo [disk|ring|grid]");
            return;
        }
    };
    let cfg = HullCfg::default();
    for i in 0..5u64 {
        let n = 10usize.pow(i as u32 + 1);
        let cloud = draw_cloud(
            CloudCfg {
                count: n,
                shape,
                scale: 8.0,
            },
            ReplayToken { seed: 2025, index: i },
        );
        let deepest = AtomicUsize::new(0);
        let depth = |step: &MergeStep<'_>| {
            deepest.fetch_max(step.depth, Ordering::Relaxed);
        };
        let dc = match compute_hull_with(&cloud, &cfg, &depth) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("sample {i}: {e}");
                continue;
            }
        };
        let mc_len = MonotoneChain.solve(&cloud).map(|h| h.len()).unwrap_or(0);
        println!(
            "{mode} sample {i}: n={n}, hull={} (monotone {mc_len}), depth={}, verify={:?}",
            dc.len(),
            deepest.into_inner(),
            verify(&cloud, &dc, cfg.eps)
        );
    }
}
