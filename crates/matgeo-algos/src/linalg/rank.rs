//! Matrix rank by Gaussian elimination
//!
//! Two independent routines:
//! - [`check_vectors`] assembles three vectors as matrix columns, runs
//!   partial-pivoting elimination and only reports whether the rank is full
//!   (code 3) or not (code 2).
//! - [`calculate_rank`] reduces a matrix to reduced row echelon form and
//!   returns the number of pivots (0–3).
//!
//! Neither routine touches the caller's data; elimination runs on a local copy.

use crate::{Matrix3, Vector3, TOLERANCE};

/// Parameters for the elimination routines
#[derive(Debug, Clone)]
pub struct EliminationParams {
    /// Entries with magnitude below this are treated as zero.
    /// Default: 1e-9
    pub tolerance: f64,
}

impl Default for EliminationParams {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Linear dependence of three vectors, as reported by [`check_vectors`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependence {
    /// Rank < 3: the vectors are coplanar (code 2)
    Dependent,
    /// Rank 3 (code 3)
    Independent,
}

impl Dependence {
    /// Interpret a [`check_vectors`] result code; only 2 and 3 are valid
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            2 => Some(Dependence::Dependent),
            3 => Some(Dependence::Independent),
            _ => None,
        }
    }

    /// The result code [`check_vectors`] uses for this outcome
    pub fn code(self) -> u32 {
        match self {
            Dependence::Dependent => 2,
            Dependence::Independent => 3,
        }
    }
}

/// Check three vectors for linear dependence using the default tolerance.
///
/// Returns 2 if the rank of the column matrix `[v1 v2 v3]` is below 3, else 3.
pub fn check_vectors(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> u32 {
    check_vectors_with(v1, v2, v3, &EliminationParams::default())
}

/// [`check_vectors`] with explicit parameters
pub fn check_vectors_with(
    v1: &Vector3,
    v2: &Vector3,
    v3: &Vector3,
    params: &EliminationParams,
) -> u32 {
    column_dependence(v1, v2, v3, params).code()
}

/// Classify three vectors as dependent or independent
pub fn classify_vectors(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> Dependence {
    column_dependence(v1, v2, v3, &EliminationParams::default())
}

/// Partial-pivoting elimination on the column matrix `[v1 v2 v3]`
fn column_dependence(
    v1: &Vector3,
    v2: &Vector3,
    v3: &Vector3,
    params: &EliminationParams,
) -> Dependence {
    let tol = params.tolerance;

    let mut mat = [[0.0f64; 3]; 3];
    for i in 0..3 {
        mat[i] = [v1[i], v2[i], v3[i]];
    }

    for col in 0..3 {
        // Partial pivoting: largest magnitude at or below the diagonal
        let mut pivot_row = col;
        for i in col + 1..3 {
            if mat[i][col].abs() > mat[pivot_row][col].abs() {
                pivot_row = i;
            }
        }
        if pivot_row != col {
            mat.swap(col, pivot_row);
        }

        if mat[col][col].abs() < tol {
            log::trace!("column {col}: no usable pivot, skipping");
            continue;
        }

        for i in 0..3 {
            if i == col {
                continue;
            }
            let factor = mat[i][col] / mat[col][col];
            for j in col..3 {
                mat[i][j] -= factor * mat[col][j];
            }
        }
    }

    let zero_rows = mat
        .iter()
        .filter(|row| row.iter().all(|x| x.abs() <= tol))
        .count();
    let rank = 3 - zero_rows;
    log::debug!("column elimination: {zero_rows} zero row(s), rank {rank}");

    if rank < 3 {
        Dependence::Dependent
    } else {
        Dependence::Independent
    }
}

/// Rank of a 3×3 matrix (0–3) using the default tolerance
pub fn calculate_rank(mat: &Matrix3) -> usize {
    calculate_rank_with(mat, &EliminationParams::default())
}

/// [`calculate_rank`] with explicit parameters
pub fn calculate_rank_with(mat: &Matrix3, params: &EliminationParams) -> usize {
    let tol = params.tolerance;
    let mut m = *mat;

    let mut rank = 0;
    let mut pivot_row = 0;

    for col in 0..3 {
        if pivot_row >= 3 {
            break;
        }

        let Some(found) = (pivot_row..3).find(|&i| m[i][col].abs() >= tol) else {
            continue;
        };
        if found != pivot_row {
            m.swap(found, pivot_row);
        }

        for row in 0..3 {
            if row == pivot_row {
                continue;
            }
            let factor = m[row][col] / m[pivot_row][col];
            for k in col..3 {
                m[row][k] -= factor * m[pivot_row][k];
            }
        }

        pivot_row += 1;
        rank += 1;
    }

    rank
}
