//! Jacobi eigenvalue method for symmetric 3×3 matrices
//!
//! Reference results for the exercises: exact eigenvalues of symmetric
//! matrices and singular values of arbitrary ones (via AᵀA), independent of
//! the integer root search in [`super::eigen`].

use crate::{Matrix3, Vector3};

const MAX_SWEEPS: usize = 50;
const OFF_DIAGONAL_EPS: f64 = 1e-30;

/// Eigen-decomposition of a symmetric 3×3 matrix
#[derive(Debug, Clone)]
pub struct SymmetricEigen {
    /// Eigenvalues, sorted descending
    pub values: Vector3,
    /// Unit eigenvectors as columns: `vectors[row][k]` belongs to `values[k]`
    pub vectors: Matrix3,
}

impl SymmetricEigen {
    /// Eigenvector `k` as a vector
    pub fn vector(&self, k: usize) -> Vector3 {
        [self.vectors[0][k], self.vectors[1][k], self.vectors[2][k]]
    }
}

/// Eigenvalues and eigenvectors of a symmetric matrix.
///
/// Only the upper triangle is read; the lower one is assumed to mirror it.
pub fn symmetric_eigen(mat: &Matrix3) -> SymmetricEigen {
    let mut a = [
        [mat[0][0], mat[0][1], mat[0][2]],
        [mat[0][1], mat[1][1], mat[1][2]],
        [mat[0][2], mat[1][2], mat[2][2]],
    ];
    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    let mut sweeps = 0;
    while sweeps < MAX_SWEEPS {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        if off < OFF_DIAGONAL_EPS {
            break;
        }
        for &(p, q) in &[(0usize, 1usize), (0, 2), (1, 2)] {
            if a[p][q].abs() < 1e-15 {
                continue;
            }
            rotate(&mut a, &mut v, p, q);
        }
        sweeps += 1;
    }
    if sweeps == MAX_SWEEPS {
        log::debug!("Jacobi iteration stopped after {MAX_SWEEPS} sweeps");
    }

    let mut order = [0usize, 1, 2];
    order.sort_by(|&i, &j| a[j][j].total_cmp(&a[i][i]));

    let mut vectors = [[0.0; 3]; 3];
    for (k, &src) in order.iter().enumerate() {
        for row in 0..3 {
            vectors[row][k] = v[row][src];
        }
    }

    SymmetricEigen {
        values: [a[order[0]][order[0]], a[order[1]][order[1]], a[order[2]][order[2]]],
        vectors,
    }
}

/// Singular values of `mat`, sorted descending
pub fn singular_values(mat: &Matrix3) -> Vector3 {
    // (AᵀA)_{ij} = dot(col_i, col_j)
    let mut ata: Matrix3 = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            ata[i][j] = (0..3).map(|k| mat[k][i] * mat[k][j]).sum();
        }
    }
    symmetric_eigen(&ata).values.map(|l| l.max(0.0).sqrt())
}

/// Apply one Givens rotation in the (p, q) plane to zero `a[p][q]`
fn rotate(a: &mut Matrix3, v: &mut Matrix3, p: usize, q: usize) {
    let app = a[p][p];
    let aqq = a[q][q];
    let apq = a[p][q];

    let tau = (aqq - app) / (2.0 * apq);
    let t = if tau >= 0.0 {
        1.0 / (tau + (1.0 + tau * tau).sqrt())
    } else {
        -1.0 / (-tau + (1.0 + tau * tau).sqrt())
    };
    let c = 1.0 / (1.0 + t * t).sqrt();
    let s = t * c;

    a[p][p] = app - t * apq;
    a[q][q] = aqq + t * apq;
    a[p][q] = 0.0;
    a[q][p] = 0.0;

    let r = 3 - p - q;
    let arp = a[r][p];
    let arq = a[r][q];
    a[r][p] = c * arp - s * arq;
    a[p][r] = a[r][p];
    a[r][q] = s * arp + c * arq;
    a[q][r] = a[r][q];

    for row in v.iter_mut() {
        let vp = row[p];
        let vq = row[q];
        row[p] = c * vp - s * vq;
        row[q] = s * vp + c * vq;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat_vec(m: &Matrix3, x: &Vector3) -> Vector3 {
        [
            m[0][0] * x[0] + m[0][1] * x[1] + m[0][2] * x[2],
            m[1][0] * x[0] + m[1][1] * x[1] + m[1][2] * x[2],
            m[2][0] * x[0] + m[2][1] * x[1] + m[2][2] * x[2],
        ]
    }

    fn assert_eigenpairs(m: &Matrix3, eig: &SymmetricEigen) {
        for k in 0..3 {
            let x = eig.vector(k);
            let len: f64 = x.iter().map(|c| c * c).sum::<f64>().sqrt();
            assert!((len - 1.0).abs() < 1e-9, "eigenvector {} has length {}", k, len);
            let ax = mat_vec(m, &x);
            for i in 0..3 {
                assert!(
                    (ax[i] - eig.values[k] * x[i]).abs() < 1e-9,
                    "A·v{} differs from λ·v{} at component {}: {} vs {}",
                    k,
                    k,
                    i,
                    ax[i],
                    eig.values[k] * x[i]
                );
            }
        }
    }

    #[test]
    fn test_diagonal() {
        let m = [[1.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, -2.0]];
        let eig = symmetric_eigen(&m);
        assert_eq!(eig.values, [5.0, 1.0, -2.0]);
        assert_eigenpairs(&m, &eig);
    }

    #[test]
    fn test_permutation_matrix() {
        let m = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];
        let eig = symmetric_eigen(&m);
        let expected = [1.0, 1.0, -1.0];
        for k in 0..3 {
            assert!((eig.values[k] - expected[k]).abs() < 1e-12, "λ{} = {}", k, eig.values[k]);
        }
        assert_eigenpairs(&m, &eig);
    }

    #[test]
    fn test_tridiagonal() {
        // Eigenvalues 2 + √2, 2, 2 − √2
        let m = [[2.0, 1.0, 0.0], [1.0, 2.0, 1.0], [0.0, 1.0, 2.0]];
        let eig = symmetric_eigen(&m);
        let r2 = std::f64::consts::SQRT_2;
        let expected = [2.0 + r2, 2.0, 2.0 - r2];
        for k in 0..3 {
            assert!((eig.values[k] - expected[k]).abs() < 1e-10, "λ{} = {}", k, eig.values[k]);
        }
        assert_eigenpairs(&m, &eig);
    }

    #[test]
    fn test_singular_values_scaling() {
        let m = [[0.0, 0.0, 1.0], [3.0, 0.0, 0.0], [0.0, -2.0, 0.0]];
        let s = singular_values(&m);
        assert!((s[0] - 3.0).abs() < 1e-10, "s[0]={}", s[0]);
        assert!((s[1] - 2.0).abs() < 1e-10, "s[1]={}", s[1]);
        assert!((s[2] - 1.0).abs() < 1e-10, "s[2]={}", s[2]);
    }

    #[test]
    fn test_singular_values_rank_one() {
        let m = [[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let s = singular_values(&m);
        assert!((s[0] - 14.0f64.sqrt()).abs() < 1e-10, "s[0]={}", s[0]);
        assert!(s[1] < 1e-6, "s[1] should be ~zero: {}", s[1]);
        assert!(s[2] < 1e-6, "s[2] should be ~zero: {}", s[2]);
    }
}
