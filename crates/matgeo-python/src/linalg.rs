//! Exercise routines as Python functions
//!
//! Matrices are accepted as nested sequences `[[a, b, c], ...]` (row-major),
//! vectors as 3-sequences.

use pyo3::prelude::*;

use matgeo_algos::{EigenSearchParams, EliminationParams, Matrix3, Vector3};

use crate::error::ResultExt;

/// Return 2 if the three vectors are linearly dependent, 3 otherwise
#[pyfunction]
#[pyo3(signature = (v1, v2, v3, tolerance=matgeo_algos::TOLERANCE))]
pub fn check_vectors(v1: Vector3, v2: Vector3, v3: Vector3, tolerance: f64) -> u32 {
    matgeo_algos::check_vectors_with(&v1, &v2, &v3, &EliminationParams { tolerance })
}

/// Rank (0–3) of a 3×3 matrix
#[pyfunction]
#[pyo3(signature = (mat, tolerance=matgeo_algos::TOLERANCE))]
pub fn calculate_rank(mat: Matrix3, tolerance: f64) -> usize {
    matgeo_algos::calculate_rank_with(&mat, &EliminationParams { tolerance })
}

/// Integer eigenvalue estimate of a 3×3 matrix
#[pyfunction]
#[pyo3(signature = (mat, search_radius=3, tolerance=matgeo_algos::TOLERANCE))]
pub fn find_eigenvalues(mat: Matrix3, search_radius: i32, tolerance: f64) -> Vector3 {
    let params = EigenSearchParams {
        search_radius,
        tolerance,
    };
    matgeo_algos::find_eigenvalues_with(&mat, &params)
}

/// Eigenvalues of a symmetric 3×3 matrix, descending
#[pyfunction]
pub fn symmetric_eigenvalues(mat: Matrix3) -> Vector3 {
    matgeo_algos::symmetric_eigen(&mat).values
}

/// Inner product of two 3-vectors
#[pyfunction]
pub fn inner_product(a: Vector3, b: Vector3) -> f64 {
    matgeo_algos::inner_product(&a, &b)
}

/// Point of contact `(x, y)` of the normal to x² − xy + 1 = 0 perpendicular to Ax + By + C = 0
#[pyfunction]
pub fn solve_for_point(line_a: f64, line_b: f64) -> PyResult<(f64, f64)> {
    let [x, y] = matgeo_algos::solve_for_point(line_a, line_b).map_py_err()?;
    Ok((x, y))
}

/// Register the functions on the module
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check_vectors, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_rank, m)?)?;
    m.add_function(wrap_pyfunction!(find_eigenvalues, m)?)?;
    m.add_function(wrap_pyfunction!(symmetric_eigenvalues, m)?)?;
    m.add_function(wrap_pyfunction!(inner_product, m)?)?;
    m.add_function(wrap_pyfunction!(solve_for_point, m)?)?;
    Ok(())
}
