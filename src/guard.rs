//! Domain preconditions of the transform engine.
//!
//! The engine itself never checks its inputs: at the poles or for tracks
//! grazing a surface it returns infinities and NaNs. Propagators that want to
//! reject such states before they reach the Jacobians run these checks first.

use crate::coordinates::CoordinateFrame;
use crate::definitions::*;
use crate::geometry::{Mask, Transform3};
use crate::tracks::helper;
use thiserror::Error;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("phi {phi} outside the closed interval [-pi, pi]")]
    PhiOutOfRange { phi: Scalar },
    #[error("theta {theta} outside the open interval (0, pi)")]
    ThetaOutOfRange { theta: Scalar },
    #[error("direction too close to the polar axis (sin theta = {sin_theta})")]
    PolarDirection { sin_theta: Scalar },
    #[error("direction is not unit length (norm = {norm})")]
    NonUnitDirection { norm: Scalar },
    #[error("track runs tangential to the surface (cos incidence = {cos_incidence})")]
    TangentialIncidence { cos_incidence: Scalar },
    #[error("parameter {index} is not finite")]
    NonFinite { index: usize },
}

/// Thresholds used by the checks in this module.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// Smallest accepted `|sin(theta)|`.
    pub min_sin_theta: Scalar,
    /// Smallest accepted `|normal · dir|`.
    pub min_cos_incidence: Scalar,
    /// Accepted deviation of the direction norm from one.
    pub unit_norm: Scalar,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            min_sin_theta: 1e-6,
            min_cos_incidence: 1e-6,
            unit_norm: 1e-6,
        }
    }
}

impl Tolerances {
    pub fn with_min_sin_theta(mut self, value: Scalar) -> Self {
        self.min_sin_theta = value;
        self
    }

    pub fn with_min_cos_incidence(mut self, value: Scalar) -> Self {
        self.min_cos_incidence = value;
        self
    }

    pub fn with_unit_norm(mut self, value: Scalar) -> Self {
        self.unit_norm = value;
        self
    }
}

fn check_finite(values: &[Scalar]) -> Result<(), DomainError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DomainError::NonFinite { index }),
        None => Ok(()),
    }
}

pub fn check_bound_vector(bound_vec: &BoundVector, tol: &Tolerances) -> Result<(), DomainError> {
    check_finite(bound_vec.as_slice())?;

    let phi = bound_vec[BOUND_PHI];
    if !(-std::f64::consts::PI..=std::f64::consts::PI).contains(&phi) {
        return Err(DomainError::PhiOutOfRange { phi });
    }
    let theta = bound_vec[BOUND_THETA];
    if theta <= 0.0 || theta >= std::f64::consts::PI {
        return Err(DomainError::ThetaOutOfRange { theta });
    }
    let sin_theta = theta.sin();
    if sin_theta < tol.min_sin_theta {
        return Err(DomainError::PolarDirection { sin_theta });
    }
    trace!(theta, "bound vector accepted");
    Ok(())
}

pub fn check_free_vector(free_vec: &FreeVector, tol: &Tolerances) -> Result<(), DomainError> {
    check_finite(free_vec.as_slice())?;

    let dir = helper::free_dir(free_vec);
    let norm = dir.norm();
    if (norm - 1.0).abs() > tol.unit_norm {
        return Err(DomainError::NonUnitDirection { norm });
    }
    let sin_theta = helper::perp(&dir) / norm;
    if sin_theta < tol.min_sin_theta {
        return Err(DomainError::PolarDirection { sin_theta });
    }
    trace!(sin_theta, "free vector accepted");
    Ok(())
}

/// Checks that the track crosses the surface at a usable angle and returns
/// the cosine between direction and surface normal.
///
/// Only the path correction divides by this cosine; the free→bound
/// Jacobian itself is well defined for tracks inside the surface.
pub fn check_incidence<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    free_vec: &FreeVector,
    tol: &Tolerances,
) -> Result<Scalar, DomainError>
where
    F: CoordinateFrame,
    M: Mask + ?Sized,
{
    check_finite(free_vec.as_slice())?;

    let pos = helper::free_pos(free_vec);
    let dir = helper::free_dir(free_vec);
    let normal = frame.reference_frame(trf, mask, &pos, &dir).column(2).into_owned();
    let cos_incidence = normal.dot(&dir);
    if cos_incidence.abs() < tol.min_cos_incidence {
        return Err(DomainError::TangentialIncidence { cos_incidence });
    }
    Ok(cos_incidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Cartesian2;
    use crate::geometry::Unbounded;
    use std::f64::consts::PI;

    fn free_along(dir: Vector3) -> FreeVector {
        let mut v = FreeVector::zeros();
        helper::set_free_dir(&mut v, &dir);
        v[FREE_QOVERP] = 1.0;
        v
    }

    #[test]
    fn test_bound_theta_range() {
        let tol = Tolerances::default();
        let mut b = BoundVector::from_column_slice(&[0.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
        assert!(check_bound_vector(&b, &tol).is_ok());

        b[BOUND_THETA] = 0.0;
        assert_eq!(
            check_bound_vector(&b, &tol),
            Err(DomainError::ThetaOutOfRange { theta: 0.0 })
        );
        b[BOUND_THETA] = PI;
        assert!(matches!(
            check_bound_vector(&b, &tol),
            Err(DomainError::ThetaOutOfRange { .. })
        ));
        b[BOUND_THETA] = 1e-9;
        assert!(matches!(
            check_bound_vector(&b, &tol),
            Err(DomainError::PolarDirection { .. })
        ));
        assert!(check_bound_vector(&b, &tol.with_min_sin_theta(1e-12)).is_ok());
    }

    #[test]
    fn test_bound_phi_range() {
        let tol = Tolerances::default();
        let mut b = BoundVector::from_column_slice(&[0.0, 0.0, PI, 1.0, 0.0, 1.0]);
        assert!(check_bound_vector(&b, &tol).is_ok());
        b[BOUND_PHI] = -PI;
        assert!(check_bound_vector(&b, &tol).is_ok());

        b[BOUND_PHI] = 3.5;
        assert_eq!(
            check_bound_vector(&b, &tol),
            Err(DomainError::PhiOutOfRange { phi: 3.5 })
        );
        b[BOUND_PHI] = -2.0 * PI;
        assert!(matches!(
            check_bound_vector(&b, &tol),
            Err(DomainError::PhiOutOfRange { .. })
        ));
    }

    #[test]
    fn test_non_finite_reports_index() {
        let mut b = BoundVector::from_column_slice(&[0.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
        b[BOUND_TIME] = f64::NAN;
        assert_eq!(
            check_bound_vector(&b, &Tolerances::default()),
            Err(DomainError::NonFinite { index: BOUND_TIME })
        );
    }

    #[test]
    fn test_free_direction_checks() {
        let tol = Tolerances::default();
        assert!(check_free_vector(&free_along(helper::dir_from_angles(0.2, 0.5)), &tol).is_ok());
        assert!(matches!(
            check_free_vector(&free_along(Vector3::new(0.0, 0.0, 1.0)), &tol),
            Err(DomainError::PolarDirection { .. })
        ));
        assert!(matches!(
            check_free_vector(&free_along(Vector3::new(2.0, 0.0, 0.0)), &tol),
            Err(DomainError::NonUnitDirection { .. })
        ));
    }

    #[test]
    fn test_incidence_on_plane() {
        let tol = Tolerances::default();
        let trf = Transform3::identity();

        let crossing = free_along(helper::dir_from_angles(0.0, PI / 3.0));
        let cos = check_incidence(&Cartesian2, &trf, &Unbounded, &crossing, &tol).unwrap();
        assert!((cos - 0.5).abs() < 1e-12);

        let grazing = free_along(Vector3::new(1.0, 0.0, 0.0));
        assert!(matches!(
            check_incidence(&Cartesian2, &trf, &Unbounded, &grazing, &tol),
            Err(DomainError::TangentialIncidence { .. })
        ));

        let mut broken = crossing;
        broken[FREE_POS1] = f64::INFINITY;
        assert_eq!(
            check_incidence(&Cartesian2, &trf, &Unbounded, &broken, &tol),
            Err(DomainError::NonFinite { index: FREE_POS1 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = DomainError::TangentialIncidence { cos_incidence: 0.0 };
        assert_eq!(
            err.to_string(),
            "track runs tangential to the surface (cos incidence = 0)"
        );
    }
}
