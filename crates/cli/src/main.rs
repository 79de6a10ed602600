mod points;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dchull::api::{
    compute_hull_with, verify, DivideAndConquer, Hull, HullCfg, HullSolver, MonotoneChain, Point,
    TracingObserver, MAX_SCALE,
};
use points::ShapeArg;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner")]
struct Cmd {
    /// Log at trace level, including one event per merge of the D&C solver
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a hull and write it as JSON (plus a provenance sidecar)
    Hull {
        #[command(flatten)]
        source: Source,
        #[arg(long, value_enum, default_value_t = Algo::Dc)]
        algo: Algo,
        /// Fork-join once a sub-problem has at least this many points
        #[arg(long)]
        parallel_cutoff: Option<usize>,
        /// Check the result against the input before writing
        #[arg(long)]
        verify: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Run both solvers on the same input and check that they agree
    Compare {
        #[command(flatten)]
        source: Source,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct Source {
    /// Number of random points (exclusive with --input)
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = ShapeArg::Disk)]
    shape: ShapeArg,
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// CSV file with columns x and y
    #[arg(long)]
    input: Option<PathBuf>,
}

impl Source {
    fn load(&self) -> Result<Vec<Point>> {
        match (&self.input, self.random) {
            (Some(path), _) => points::read_points_csv(path),
            (None, Some(n)) => {
                if !(self.scale.is_finite() && self.scale > 0.0 && self.scale <= MAX_SCALE) {
                    bail!("--scale must be in (0, {MAX_SCALE:e}], got {}", self.scale);
                }
                Ok(points::random_points(n, self.seed, self.shape, self.scale))
            }
            (None, None) => bail!("one of --random or --input is required"),
        }
    }

    fn describe(&self) -> serde_json::Value {
        match &self.input {
            Some(path) => serde_json::json!({ "input": path.to_string_lossy() }),
            None => serde_json::json!({
                "random": self.random,
                "seed": self.seed,
                "shape": format!("{:?}", self.shape).to_lowercase(),
                "scale": self.scale,
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    /// Divide and conquer
    Dc,
    /// Andrew's monotone chain
    Monotone,
}

/// Written to `--out`.
#[derive(Debug, Serialize)]
struct HullDoc {
    algo: &'static str,
    input_points: usize,
    vertices: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.trace { Level::TRACE } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Hull {
            source,
            algo,
            parallel_cutoff,
            verify,
            out,
        } => run_hull(&source, algo, parallel_cutoff, verify, cmd.trace, &out),
        Action::Compare { source } => compare(&source),
        Action::Report => report(),
    }
}

fn solver(algo: Algo, parallel_cutoff: Option<usize>) -> Box<dyn HullSolver> {
    match algo {
        Algo::Dc => Box::new(DivideAndConquer {
            cfg: HullCfg {
                parallel_cutoff,
                ..HullCfg::default()
            },
        }),
        Algo::Monotone => Box::new(MonotoneChain),
    }
}

fn run_hull(
    source: &Source,
    algo: Algo,
    parallel_cutoff: Option<usize>,
    check: bool,
    trace: bool,
    out: &Path,
) -> Result<()> {
    let pts = source.load()?;
    let solver = solver(algo, parallel_cutoff);
    tracing::info!(algo = solver.name(), points = pts.len(), out = %out.display(), "hull");
    let hull = match algo {
        Algo::Dc if trace => {
            let cfg = HullCfg {
                parallel_cutoff,
                ..HullCfg::default()
            };
            compute_hull_with(&pts, &cfg, &TracingObserver)?
        }
        _ => solver.solve(&pts)?,
    };
    tracing::info!(vertices = hull.len(), area = -hull.signed_area(), "hull_done");
    if check {
        verify(&pts, &hull, HullCfg::default().eps)
            .with_context(|| format!("{} produced an invalid hull", solver.name()))?;
        tracing::info!("verified");
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let doc = HullDoc {
        algo: solver.name(),
        input_points: pts.len(),
        vertices: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
    };
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let mut params = source.describe();
    params["algo"] = serde_json::json!(doc.algo);
    params["parallel_cutoff"] = serde_json::json!(parallel_cutoff);
    params["verify"] = serde_json::json!(check);
    let sidecar = provenance::write_sidecar(out, params)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance");
    Ok(())
}

/// Same vertex cycle, ignoring the starting vertex.
fn same_cycle(a: &Hull, b: &Hull) -> bool {
    let (a, b) = (a.vertices(), b.vertices());
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() {
        return true;
    }
    match b.iter().position(|p| *p == a[0]) {
        Some(k) => (0..a.len()).all(|i| a[i] == b[(k + i) % b.len()]),
        None => false,
    }
}

fn compare(source: &Source) -> Result<()> {
    let pts = source.load()?;
    let dc = solver(Algo::Dc, None).solve(&pts)?;
    let mc = solver(Algo::Monotone, None).solve(&pts)?;
    let agree = same_cycle(&dc, &mc);
    tracing::info!(
        points = pts.len(),
        dc = dc.len(),
        monotone = mc.len(),
        agree,
        "compare"
    );
    if !agree {
        bail!(
            "solvers disagree: divide-and-conquer has {} vertices, monotone chain {}",
            dc.len(),
            mc.len()
        );
    }
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::Provenance::new(serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn random_source(n: usize) -> Source {
        Source {
            random: Some(n),
            seed: 5,
            shape: ShapeArg::Square,
            scale: 3.0,
            input: None,
        }
    }

    #[test]
    fn hull_command_writes_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("pts.csv");
        std::fs::write(&csv, "x,y\n0,0\n2,0\n2,2\n0,2\n1,1\n").unwrap();
        let out = dir.path().join("out").join("hull.json");
        let source = Source {
            input: Some(csv),
            random: None,
            ..random_source(0)
        };
        run_hull(&source, Algo::Dc, None, true, false, &out).unwrap();

        let doc: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["algo"], "divide-and-conquer");
        assert_eq!(doc["input_points"], 5);
        assert_eq!(
            doc["vertices"],
            serde_json::json!([[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]])
        );
        let side = dir.path().join("out").join("hull.provenance.json");
        let prov: Value = serde_json::from_slice(&std::fs::read(side).unwrap()).unwrap();
        assert_eq!(prov["params"]["verify"], true);
    }

    #[test]
    fn traced_run_writes_the_same_hull() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("plain.json");
        let traced = dir.path().join("traced.json");
        let source = random_source(200);
        run_hull(&source, Algo::Dc, Some(16), false, false, &plain).unwrap();
        run_hull(&source, Algo::Dc, Some(16), false, true, &traced).unwrap();
        let a: Value = serde_json::from_slice(&std::fs::read(plain).unwrap()).unwrap();
        let b: Value = serde_json::from_slice(&std::fs::read(traced).unwrap()).unwrap();
        assert_eq!(a["vertices"], b["vertices"]);
    }

    #[test]
    fn out_of_range_scale_is_an_error() {
        for scale in [f64::INFINITY, f64::NAN, 1e308, 0.0, -1.0] {
            let source = Source {
                scale,
                ..random_source(4)
            };
            let err = source.load().unwrap_err();
            assert!(err.to_string().contains("--scale"), "{scale}: {err}");
        }
        let dir = tempdir().unwrap();
        let huge = Source {
            scale: 1e308,
            ..random_source(4)
        };
        let out = dir.path().join("h.json");
        assert!(run_hull(&huge, Algo::Dc, None, false, false, &out).is_err());
        assert!(!out.exists());
        let edge = Source {
            scale: MAX_SCALE,
            ..random_source(4)
        };
        assert_eq!(edge.load().unwrap().len(), 4);
    }

    #[test]
    fn solvers_agree_on_random_clouds() {
        for n in [0, 1, 2, 10, 500] {
            compare(&random_source(n)).unwrap();
        }
        let grid = Source {
            shape: ShapeArg::Grid,
            ..random_source(300)
        };
        compare(&grid).unwrap();
    }

    #[test]
    fn same_cycle_ignores_rotation() {
        let a = Hull::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ]);
        let mut rotated = a.verts.clone();
        rotated.rotate_left(1);
        assert!(same_cycle(&a, &Hull::new(rotated.clone())));
        rotated.reverse();
        assert!(!same_cycle(&a, &Hull::new(rotated)));
    }
}
