//! 3-vector products and the plane spanned by dependent vectors

use lin_alg::f64::Vec3;

use crate::{Vector3, TOLERANCE};

fn to_vec3(v: &Vector3) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// Inner (dot) product `a · b = Σ aᵢ·bᵢ`
pub fn inner_product(a: &Vector3, b: &Vector3) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Cross product `a × b`
pub fn cross_product(a: &Vector3, b: &Vector3) -> Vector3 {
    let c = to_vec3(a).cross(to_vec3(b));
    [c.x, c.y, c.z]
}

/// Unit normal of the plane containing three coplanar vectors.
///
/// Uses the first pair among (v1, v2), (v1, v3), (v2, v3) whose cross product
/// is not degenerate. Returns `None` when the vectors do not span a plane
/// (all collinear or zero) or when they are linearly independent.
pub fn spanning_plane_normal(v1: &Vector3, v2: &Vector3, v3: &Vector3) -> Option<Vector3> {
    let (a, b, c) = (to_vec3(v1), to_vec3(v2), to_vec3(v3));

    let normal = [a.cross(b), a.cross(c), b.cross(c)]
        .into_iter()
        .find(|n| n.magnitude() > TOLERANCE)?
        .to_normalized();

    // The remaining vector must lie in the plane
    let off_plane = [a, b, c]
        .iter()
        .map(|v| normal.dot(*v).abs())
        .fold(0.0f64, f64::max);
    let scale = [a, b, c].iter().map(|v| v.magnitude()).fold(1.0f64, f64::max);
    if off_plane > TOLERANCE * scale {
        log::debug!("vectors are independent (distance {off_plane} from plane)");
        return None;
    }

    Some([normal.x, normal.y, normal.z])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_product_orthogonal() {
        assert_eq!(inner_product(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_inner_product_commutative() {
        let pairs = [
            ([1.0, 2.0, 3.0], [4.0, -5.0, 6.0]),
            ([0.1, 0.2, 0.3], [-7.5, 1e3, 2.25]),
            ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
        ];
        for (a, b) in pairs {
            assert_eq!(inner_product(&a, &b), inner_product(&b, &a));
        }
        assert_eq!(inner_product(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
    }

    #[test]
    fn test_cross_product() {
        assert_eq!(cross_product(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        let a = [1.0, 2.0, 3.0];
        let b = [-2.0, 0.5, 4.0];
        let c = cross_product(&a, &b);
        assert!(inner_product(&c, &a).abs() < 1e-12);
        assert!(inner_product(&c, &b).abs() < 1e-12);
    }

    #[test]
    fn test_plane_normal_coplanar() {
        let n = spanning_plane_normal(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[2.0, 3.0, 0.0]).unwrap();
        assert!((n[2].abs() - 1.0).abs() < 1e-12, "normal = {:?}", n);
    }

    #[test]
    fn test_plane_normal_first_pair_parallel() {
        // v1 ∥ v2, so the normal comes from (v1, v3)
        let n = spanning_plane_normal(&[1.0, 1.0, 0.0], &[2.0, 2.0, 0.0], &[0.0, 0.0, 5.0]).unwrap();
        let expected = std::f64::consts::FRAC_1_SQRT_2;
        assert!((n[0].abs() - expected).abs() < 1e-12);
        assert!((n[1].abs() - expected).abs() < 1e-12);
        assert!(n[2].abs() < 1e-12);
    }

    #[test]
    fn test_plane_normal_independent() {
        assert!(spanning_plane_normal(&[1.0, 0.0, 1.0], &[2.0, 3.0, 1.0], &[5.0, 6.0, 4.0]).is_none());
    }

    #[test]
    fn test_plane_normal_collinear() {
        assert!(spanning_plane_normal(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[0.0, 0.0, 0.0]).is_none());
    }
}
