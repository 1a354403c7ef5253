//! Covariance transport between parametrizations: `J · C · Jᵀ`.

use crate::definitions::*;

#[inline]
pub fn transport_covariance<const R: usize, const C: usize>(
    jacobian: &MatrixType<R, C>,
    covariance: &MatrixType<C, C>,
) -> MatrixType<R, R> {
    jacobian * covariance * jacobian.transpose()
}

pub fn bound_to_free_covariance(
    jac_to_global: &BoundToFreeMatrix,
    bound_cov: &BoundMatrix,
) -> FreeMatrix {
    transport_covariance(jac_to_global, bound_cov)
}

pub fn free_to_bound_covariance(
    jac_to_local: &FreeToBoundMatrix,
    free_cov: &FreeMatrix,
) -> BoundMatrix {
    transport_covariance(jac_to_local, free_cov)
}
