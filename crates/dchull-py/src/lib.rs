//! PyO3 bindings for the hull solvers.
//!
//! Points cross the boundary as lists of `(x, y)` tuples; hull vertices come
//! back the same way, clockwise. Every `HullError` becomes `ValueError`.

use dchull::api::{DivideAndConquer, HullCfg, HullError, HullSolver, MonotoneChain};
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn run(solver: &dyn HullSolver, points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    let pts: Vec<_> = points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect();
    let hull = solver.solve(&pts).map_err(to_py_err)?;
    Ok(hull.vertices().iter().map(|p| (p.x, p.y)).collect())
}

/// Clockwise convex hull by divide and conquer.
///
/// `parallel_cutoff` enables fork-join recursion for sub-problems of at
/// least that many points.
#[pyfunction]
#[pyo3(signature = (points, parallel_cutoff=None))]
fn compute_hull(
    py: Python<'_>,
    points: Vec<(f64, f64)>,
    parallel_cutoff: Option<usize>,
) -> PyResult<Vec<(f64, f64)>> {
    let solver = DivideAndConquer {
        cfg: HullCfg {
            parallel_cutoff,
            ..HullCfg::default()
        },
    };
    py.allow_threads(|| run(&solver, points))
}

/// Clockwise convex hull by Andrew's monotone chain.
#[pyfunction]
fn compute_hull_monotone(points: Vec<(f64, f64)>) -> PyResult<Vec<(f64, f64)>> {
    run(&MonotoneChain, points)
}

#[pymodule]
fn dchull_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_hull, m)?)?;
    m.add_function(wrap_pyfunction!(compute_hull_monotone, m)?)?;
    m.add("__version__", dchull::VERSION)?;
    Ok(())
}
