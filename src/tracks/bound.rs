use crate::definitions::*;
use crate::tracks::helper;
use approx::AbsDiffEq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Track state on a surface, with its covariance.
///
/// `loc0`/`loc1` only mean something together with the surface they were
/// measured on; this type does not keep a link to it.
///
/// Equality follows [`FreeTrackParameters`](crate::tracks::FreeTrackParameters):
/// `==` compares vector and covariance entry by entry within machine epsilon,
/// [`AbsDiffEq`] with a caller-chosen epsilon.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundTrackParameters {
    vector: BoundVector,
    covariance: BoundMatrix,
}

impl Default for BoundTrackParameters {
    fn default() -> Self {
        Self::new(BoundVector::zeros())
    }
}

impl From<BoundVector> for BoundTrackParameters {
    fn from(vector: BoundVector) -> Self {
        Self::new(vector)
    }
}

impl BoundTrackParameters {
    pub fn new(vector: BoundVector) -> Self {
        Self {
            vector,
            covariance: BoundMatrix::zeros(),
        }
    }

    pub fn with_covariance(mut self, covariance: BoundMatrix) -> Self {
        self.covariance = covariance;
        self
    }

    #[inline]
    pub fn vector(&self) -> &BoundVector {
        &self.vector
    }

    #[inline]
    pub fn covariance(&self) -> &BoundMatrix {
        &self.covariance
    }

    pub fn set_covariance(&mut self, covariance: BoundMatrix) {
        self.covariance = covariance;
    }

    #[inline]
    pub fn local(&self) -> Point2 {
        helper::bound_local(&self.vector)
    }

    #[inline]
    pub fn phi(&self) -> Scalar {
        self.vector[BOUND_PHI]
    }

    #[inline]
    pub fn theta(&self) -> Scalar {
        self.vector[BOUND_THETA]
    }

    #[inline]
    pub fn dir(&self) -> Vector3 {
        helper::bound_dir(&self.vector)
    }

    #[inline]
    pub fn time(&self) -> Scalar {
        helper::bound_time(&self.vector)
    }

    #[inline]
    pub fn qop(&self) -> Scalar {
        helper::bound_qop(&self.vector)
    }

    pub fn qop_t(&self) -> Scalar {
        self.qop() / self.theta().sin()
    }

    pub fn p(&self, q: Scalar) -> Scalar {
        q / self.qop()
    }

    pub fn mom(&self, q: Scalar) -> Vector3 {
        self.p(q) * self.dir()
    }
}

fn entries_within<const R: usize, const C: usize>(
    lhs: &MatrixType<R, C>,
    rhs: &MatrixType<R, C>,
    epsilon: Scalar,
) -> bool {
    lhs.iter().zip(rhs.iter()).all(|(l, r)| (l - r).abs() <= epsilon)
}

impl PartialEq for BoundTrackParameters {
    fn eq(&self, rhs: &Self) -> bool {
        entries_within(&self.vector, &rhs.vector, Scalar::EPSILON)
            && entries_within(&self.covariance, &rhs.covariance, Scalar::EPSILON)
    }
}

impl AbsDiffEq for BoundTrackParameters {
    type Epsilon = Scalar;

    fn default_epsilon() -> Scalar {
        Scalar::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Scalar) -> bool {
        self.vector.abs_diff_eq(&other.vector, epsilon)
            && self.covariance.abs_diff_eq(&other.covariance, epsilon)
    }
}
