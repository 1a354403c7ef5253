use crate::definitions::*;
use crate::tracks::helper;
use approx::AbsDiffEq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Track state in global coordinates.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeTrackParameters {
    vector: FreeVector,
}

impl Default for FreeTrackParameters {
    fn default() -> Self {
        Self {
            vector: FreeVector::zeros(),
        }
    }
}

impl From<FreeVector> for FreeTrackParameters {
    fn from(vector: FreeVector) -> Self {
        Self { vector }
    }
}

impl FreeTrackParameters {
    /// From a momentum vector and charge: the direction is the unit momentum
    /// and `qop = q / |mom|`.
    pub fn new(pos: &Point3, time: Scalar, mom: &Vector3, q: Scalar) -> Self {
        let p = mom.norm();
        let mut vector = FreeVector::zeros();
        helper::set_free_pos(&mut vector, pos);
        vector[FREE_TIME] = time;
        helper::set_free_dir(&mut vector, &(mom / p));
        vector[FREE_QOVERP] = q / p;
        Self { vector }
    }

    #[inline]
    pub fn vector(&self) -> &FreeVector {
        &self.vector
    }

    pub fn set_vector(&mut self, vector: FreeVector) {
        self.vector = vector;
    }

    #[inline]
    pub fn pos(&self) -> Point3 {
        helper::free_pos(&self.vector)
    }

    pub fn set_pos(&mut self, pos: &Point3) {
        helper::set_free_pos(&mut self.vector, pos);
    }

    #[inline]
    pub fn dir(&self) -> Vector3 {
        helper::free_dir(&self.vector)
    }

    pub fn set_dir(&mut self, dir: &Vector3) {
        helper::set_free_dir(&mut self.vector, dir);
    }

    #[inline]
    pub fn time(&self) -> Scalar {
        helper::free_time(&self.vector)
    }

    #[inline]
    pub fn qop(&self) -> Scalar {
        helper::free_qop(&self.vector)
    }

    pub fn set_qop(&mut self, qop: Scalar) {
        self.vector[FREE_QOVERP] = qop;
    }

    /// q over transverse momentum.
    pub fn qop_t(&self) -> Scalar {
        self.qop() / helper::perp(&self.dir())
    }

    /// q over longitudinal momentum.
    pub fn qop_z(&self) -> Scalar {
        self.qop() / self.dir()[2]
    }

    pub fn p(&self, q: Scalar) -> Scalar {
        q / self.qop()
    }

    pub fn mom(&self, q: Scalar) -> Vector3 {
        self.p(q) * self.dir()
    }

    pub fn p_t(&self, q: Scalar) -> Scalar {
        debug_assert!(self.qop() != 0.0);
        (q / self.qop() * helper::perp(&self.dir())).abs()
    }

    pub fn p_z(&self, q: Scalar) -> Scalar {
        debug_assert!(self.qop() != 0.0);
        (q / self.qop() * self.dir()[2]).abs()
    }
}

impl PartialEq for FreeTrackParameters {
    fn eq(&self, rhs: &Self) -> bool {
        self.vector
            .iter()
            .zip(rhs.vector.iter())
            .all(|(l, r)| (l - r).abs() <= Scalar::EPSILON)
    }
}

impl AbsDiffEq for FreeTrackParameters {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.vector.abs_diff_eq(&other.vector, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_momentum_split_into_direction_and_qop() {
        let track = FreeTrackParameters::new(
            &Point3::new(0.0, 0.0, 0.0),
            1.5,
            &Vector3::new(3.0, 0.0, 4.0),
            -1.0,
        );

        assert_relative_eq!(track.dir(), Vector3::new(0.6, 0.0, 0.8), epsilon = 1e-12);
        assert_relative_eq!(track.qop(), -0.2, epsilon = 1e-12);
        assert_relative_eq!(track.time(), 1.5);
        assert_relative_eq!(track.p(-1.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(track.p_t(-1.0), 3.0, epsilon = 1e-12);
        assert_relative_eq!(track.p_z(-1.0), 4.0, epsilon = 1e-12);
        assert_relative_eq!(track.mom(-1.0), Vector3::new(3.0, 0.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(track.qop_t(), -0.2 / 0.6, epsilon = 1e-12);
        assert_relative_eq!(track.qop_z(), -0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_equality_uses_machine_epsilon() {
        let a = FreeTrackParameters::new(
            &Point3::new(1.0, 2.0, 3.0),
            0.0,
            &Vector3::new(0.0, 1.0, 0.0),
            1.0,
        );
        let mut b = a;
        assert_eq!(a, b);

        b.set_pos(&Point3::new(1.0, 2.0, 3.0 + 1e-9));
        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-8);
    }

    #[test]
    fn test_setters() {
        let mut track = FreeTrackParameters::default();
        track.set_dir(&Vector3::new(0.0, 0.0, -1.0));
        track.set_qop(0.5);
        assert_eq!(track.vector()[FREE_DIR2], -1.0);
        assert_eq!(track.qop(), 0.5);
    }
}
