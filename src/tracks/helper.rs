//! Raw-vector accessors and spherical direction helpers.
//!
//! Angles follow the global convention: `phi` is the azimuth around the z
//! axis, `theta` the polar angle measured from +z.

use crate::definitions::*;

#[inline]
pub fn perp(v: &Vector3) -> Scalar {
    v[0].hypot(v[1])
}

/// Azimuthal angle in `[-π, π]`.
#[inline]
pub fn phi(v: &Vector3) -> Scalar {
    v[1].atan2(v[0])
}

/// Polar angle in `[0, π]`.
///
/// Uses `atan2(perp, z)`, which agrees with `acos(z)` for unit vectors and
/// does not depend on the vector length.
#[inline]
pub fn theta(v: &Vector3) -> Scalar {
    perp(v).atan2(v[2])
}

#[inline]
pub fn dir_from_angles(phi: Scalar, theta: Scalar) -> Vector3 {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

#[inline]
pub fn free_pos(free_vec: &FreeVector) -> Point3 {
    Point3::new(
        free_vec[FREE_POS0],
        free_vec[FREE_POS1],
        free_vec[FREE_POS2],
    )
}

#[inline]
pub fn set_free_pos(free_vec: &mut FreeVector, pos: &Point3) {
    free_vec[FREE_POS0] = pos[0];
    free_vec[FREE_POS1] = pos[1];
    free_vec[FREE_POS2] = pos[2];
}

#[inline]
pub fn free_dir(free_vec: &FreeVector) -> Vector3 {
    Vector3::new(
        free_vec[FREE_DIR0],
        free_vec[FREE_DIR1],
        free_vec[FREE_DIR2],
    )
}

#[inline]
pub fn set_free_dir(free_vec: &mut FreeVector, dir: &Vector3) {
    free_vec[FREE_DIR0] = dir[0];
    free_vec[FREE_DIR1] = dir[1];
    free_vec[FREE_DIR2] = dir[2];
}

#[inline]
pub fn free_time(free_vec: &FreeVector) -> Scalar {
    free_vec[FREE_TIME]
}

#[inline]
pub fn free_qop(free_vec: &FreeVector) -> Scalar {
    free_vec[FREE_QOVERP]
}

#[inline]
pub fn bound_local(bound_vec: &BoundVector) -> Point2 {
    Point2::new(bound_vec[BOUND_LOC0], bound_vec[BOUND_LOC1])
}

#[inline]
pub fn bound_dir(bound_vec: &BoundVector) -> Vector3 {
    dir_from_angles(bound_vec[BOUND_PHI], bound_vec[BOUND_THETA])
}

#[inline]
pub fn bound_time(bound_vec: &BoundVector) -> Scalar {
    bound_vec[BOUND_TIME]
}

#[inline]
pub fn bound_qop(bound_vec: &BoundVector) -> Scalar {
    bound_vec[BOUND_QOVERP]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_angles_invert_direction() {
        for &(p, t) in &[(0.3, 1.2), (-2.5, 0.1), (3.0, 3.0), (-PI / 2.0, PI / 2.0)] {
            let dir = dir_from_angles(p, t);
            assert_relative_eq!(dir.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(phi(&dir), p, epsilon = 1e-12);
            assert_relative_eq!(theta(&dir), t, epsilon = 1e-12);
            assert_relative_eq!(theta(&dir), dir[2].acos(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_phi_branch_cut() {
        // -π and π describe the same direction
        let dir = dir_from_angles(-PI, 1.0);
        assert_relative_eq!(phi(&dir).abs(), PI, epsilon = 1e-12);
        assert_relative_eq!(dir_from_angles(phi(&dir), 1.0), dir, epsilon = 1e-12);
    }

    #[test]
    fn test_theta_is_scale_invariant() {
        let dir = dir_from_angles(0.7, 0.4);
        assert_relative_eq!(theta(&(dir * 5.0)), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_free_accessors_write_expected_slots() {
        let mut v = FreeVector::zeros();
        set_free_pos(&mut v, &Point3::new(1.0, 2.0, 3.0));
        set_free_dir(&mut v, &Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(v[FREE_POS2], 3.0);
        assert_eq!(v[FREE_DIR2], 1.0);
        assert_eq!(v[FREE_TIME], 0.0);
        assert_eq!(free_pos(&v), Point3::new(1.0, 2.0, 3.0));
    }
}
