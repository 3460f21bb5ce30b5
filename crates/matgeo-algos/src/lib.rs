//! Fixed-size linear algebra and conic routines for matrix/geometry exercises
//!
//! Every routine works on stack-allocated 3×3 matrices or 3-vectors:
//! - Matrix rank by Gaussian elimination (pivoted column check and reduced row echelon)
//! - Eigenvalue estimation through the characteristic polynomial
//! - Jacobi eigenvalues and singular values for cross-checking
//! - Inner/cross products and the plane spanned by dependent vectors
//! - Normal to the hyperbola `x² − xy + 1 = 0` perpendicular to a line

pub mod conic;
pub mod error;
pub mod linalg;

pub use conic::{normal_to_hyperbola, solve_for_point, NormalLine};
pub use error::{AlgoError, AlgoResult};
pub use linalg::{
    calculate_rank, calculate_rank_with, check_vectors, check_vectors_with, classify_vectors,
    cross_product, determinant, eigenvalue_product, find_eigenvalues, find_eigenvalues_with,
    inner_product, principal_minor_sum, singular_values, spanning_plane_normal, symmetric_eigen,
    trace, CharacteristicPolynomial, Dependence, EigenSearchParams, EliminationParams,
    SymmetricEigen,
};

/// Row-major 3×3 matrix: `m[row][col]`
pub type Matrix3 = [[f64; 3]; 3];

/// 3-component vector
pub type Vector3 = [f64; 3];

/// Magnitude below which a value is treated as zero
pub const TOLERANCE: f64 = 1e-9;
