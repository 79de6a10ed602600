//! Point sources for the CLI: CSV files and seeded random clouds.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use dchull::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::Point;
use polars::prelude::*;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShapeArg {
    Disk,
    Square,
    Ring,
    Grid,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Disk => CloudShape::Disk,
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Ring => CloudShape::Ring { thickness: 0.1 },
            ShapeArg::Grid => CloudShape::Grid,
        }
    }
}

/// Seeded cloud of `count` points.
pub fn random_points(count: usize, seed: u64, shape: ShapeArg, scale: f64) -> Vec<Point> {
    draw_cloud(
        CloudCfg {
            count,
            shape: shape.into(),
            scale,
        },
        ReplayToken { seed, index: 0 },
    )
}

/// Read columns `x` and `y` from a CSV file (any numeric type, cast to f64).
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}
