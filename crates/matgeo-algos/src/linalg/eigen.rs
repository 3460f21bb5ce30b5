//! Eigenvalue estimation through the characteristic polynomial
//!
//! For a 3×3 matrix the characteristic equation is
//! `λ³ − tr(A)·λ² + C₂·λ − det(A) = 0`, where `C₂` is the sum of the
//! principal 2×2 minors. [`find_eigenvalues`] looks for its roots among a
//! small range of integers, so it only applies to matrices whose eigenvalues
//! are small integers (at least two of them inside the search range). It
//! always returns three values; outside that assumption they are not
//! eigenvalues.

use crate::{Matrix3, Vector3, TOLERANCE};

/// Parameters for the integer root search
#[derive(Debug, Clone)]
pub struct EigenSearchParams {
    /// Integers in `[-search_radius, search_radius]` are tried as roots.
    /// Default: 3
    pub search_radius: i32,
    /// `|p(λ)|` and `|p'(λ)|` below this count as zero.
    /// Default: 1e-9
    pub tolerance: f64,
}

impl Default for EigenSearchParams {
    fn default() -> Self {
        Self {
            search_radius: 3,
            tolerance: TOLERANCE,
        }
    }
}

/// Monic cubic `λ³ + b·λ² + c·λ + d`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicPolynomial {
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CharacteristicPolynomial {
    /// Characteristic polynomial of `mat`: `b = −tr`, `c = C₂`, `d = −det`
    pub fn from_matrix(mat: &Matrix3) -> Self {
        Self {
            b: -trace(mat),
            c: principal_minor_sum(mat),
            d: -determinant(mat),
        }
    }

    /// Evaluate `p(λ)`
    pub fn eval(&self, x: f64) -> f64 {
        ((x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluate `p'(λ) = 3λ² + 2bλ + c`
    pub fn derivative(&self, x: f64) -> f64 {
        (3.0 * x + 2.0 * self.b) * x + self.c
    }
}

/// Sum of the diagonal
pub fn trace(mat: &Matrix3) -> f64 {
    mat[0][0] + mat[1][1] + mat[2][2]
}

/// Principal 2×2 minors, obtained by deleting row/column 0, 1 and 2
fn principal_minors(mat: &Matrix3) -> [f64; 3] {
    [
        mat[1][1] * mat[2][2] - mat[1][2] * mat[2][1],
        mat[0][0] * mat[2][2] - mat[0][2] * mat[2][0],
        mat[0][0] * mat[1][1] - mat[0][1] * mat[1][0],
    ]
}

/// Sum of the three principal 2×2 minors
pub fn principal_minor_sum(mat: &Matrix3) -> f64 {
    principal_minors(mat).iter().sum()
}

/// Determinant by cofactor expansion along the first row
pub fn determinant(mat: &Matrix3) -> f64 {
    let m11 = principal_minors(mat)[0];
    mat[0][0] * m11 - mat[0][1] * (mat[1][0] * mat[2][2] - mat[1][2] * mat[2][0])
        + mat[0][2] * (mat[1][0] * mat[2][1] - mat[1][1] * mat[2][0])
}

/// Estimate the eigenvalues of `mat` with the default search parameters.
///
/// Roots are listed in the order they are found (ascending search), with a
/// double root repeated. See [`find_eigenvalues_with`].
pub fn find_eigenvalues(mat: &Matrix3) -> Vector3 {
    find_eigenvalues_with(mat, &EigenSearchParams::default())
}

/// Estimate the eigenvalues of `mat` by integer root search.
///
/// Each integer in the search range satisfying `|p(i)| < tolerance` is a
/// root; if the derivative also vanishes there it is a double root and is
/// emitted twice. If the search ends short of three roots, the next free slot
/// is filled with `tr(A) − λ₁ − λ₂`, unfound slots counting as zero. With two
/// integer roots that slot holds the true third eigenvalue; with fewer, the
/// result is `[r, tr − r, 0]` or `[tr, 0, 0]`.
pub fn find_eigenvalues_with(mat: &Matrix3, params: &EigenSearchParams) -> Vector3 {
    let tol = params.tolerance;
    let poly = CharacteristicPolynomial::from_matrix(mat);
    let tr = trace(mat);

    let mut roots = [0.0f64; 3];
    let mut count = 0usize;

    for i in -params.search_radius..=params.search_radius {
        if count >= 3 {
            break;
        }
        // Rational root test: zero is only a candidate when d vanishes
        if i == 0 && poly.d != 0.0 {
            continue;
        }

        let x = f64::from(i);
        if poly.eval(x).abs() >= tol {
            continue;
        }

        let multiplicity = if poly.derivative(x).abs() < tol { 2 } else { 1 };
        log::trace!("integer root {i} with multiplicity {multiplicity}");
        for _ in 0..multiplicity {
            if count < 3 {
                roots[count] = x;
                count += 1;
            }
        }
    }

    if count < 3 {
        roots[count] = tr - (roots[0] + roots[1]);
        if count < 2 {
            log::debug!(
                "only {count} integer root(s) in [-{r}, {r}]; estimate is not a full spectrum",
                r = params.search_radius
            );
        } else {
            log::debug!("third eigenvalue deduced from trace: {}", roots[2]);
        }
    }

    roots
}

/// Product of the estimated eigenvalues
pub fn eigenvalue_product(mat: &Matrix3) -> f64 {
    find_eigenvalues(mat).iter().product()
}
