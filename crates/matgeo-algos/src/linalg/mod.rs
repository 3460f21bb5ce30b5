//! Linear algebra routines on 3×3 matrices and 3-vectors
//!
//! - [`rank`] — Gaussian elimination rank (pivoted column check, reduced row echelon)
//! - [`eigen`] — characteristic polynomial and integer eigenvalue search
//! - [`jacobi`] — Jacobi eigenvalues of symmetric matrices, singular values
//! - [`vector`] — inner/cross products, plane through dependent vectors

pub mod eigen;
pub mod jacobi;
pub mod rank;
pub mod vector;

pub use eigen::{
    determinant, eigenvalue_product, find_eigenvalues, find_eigenvalues_with, principal_minor_sum,
    trace, CharacteristicPolynomial, EigenSearchParams,
};
pub use jacobi::{singular_values, symmetric_eigen, SymmetricEigen};
pub use rank::{
    calculate_rank, calculate_rank_with, check_vectors, check_vectors_with, classify_vectors,
    Dependence, EliminationParams,
};
pub use vector::{cross_product, inner_product, spanning_plane_normal};
