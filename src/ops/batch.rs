//! Row-batched conversions: one track per row, rows processed in parallel.
//!
//! Every row is independent, so the output is filled with rayon over
//! `axis_iter_mut(Axis(0))`. The surface (transform and mask) is shared
//! read-only by all rows.

use crate::coordinates::{CoordinateFrame, TransformEngine};
use crate::definitions::*;
use crate::error::{Result, TransportError};
use crate::geometry::{Mask, Transform3};
use crate::guard::{self, DomainError, Tolerances};
use ndarray::{Array2, Array3, ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2, Axis};
use rayon::prelude::*;
use tracing::{debug, warn};

fn check_columns(what: &'static str, x: &ArrayView2<f64>, expected: usize) -> Result<()> {
    if x.ncols() != expected {
        return Err(TransportError::Shape {
            what,
            expected,
            found: x.ncols(),
        });
    }
    Ok(())
}

#[inline]
fn free_row(row: ArrayView1<f64>) -> FreeVector {
    FreeVector::from_iterator(row.iter().copied())
}

#[inline]
fn bound_row(row: ArrayView1<f64>) -> BoundVector {
    BoundVector::from_iterator(row.iter().copied())
}

#[inline]
fn write_row<const N: usize>(mut row: ArrayViewMut1<f64>, v: &MatrixType<N, 1>) {
    for (dst, src) in row.iter_mut().zip(v.iter()) {
        *dst = *src;
    }
}

#[inline]
fn write_matrix<const R: usize, const C: usize>(mut out: ArrayViewMut2<f64>, m: &MatrixType<R, C>) {
    for r in 0..R {
        for c in 0..C {
            out[[r, c]] = m[(r, c)];
        }
    }
}

pub fn free_to_bound_batch<F>(
    frame: &F,
    trf: &Transform3,
    free: &ArrayView2<f64>,
) -> Result<Array2<f64>>
where
    F: CoordinateFrame + Sync,
{
    check_columns("free vectors", free, FREE_SIZE)?;
    debug!(rows = free.nrows(), "free to bound batch");

    let engine = TransformEngine::new(frame);
    let mut result = Array2::zeros((free.nrows(), BOUND_SIZE));
    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, row)| {
            let bound_vec = engine.free_to_bound_vector(trf, &free_row(free.row(i)));
            write_row(row, &bound_vec);
        });
    Ok(result)
}

pub fn bound_to_free_batch<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    bound: &ArrayView2<f64>,
) -> Result<Array2<f64>>
where
    F: CoordinateFrame + Sync,
    M: Mask + Sync + ?Sized,
{
    check_columns("bound vectors", bound, BOUND_SIZE)?;
    debug!(rows = bound.nrows(), "bound to free batch");

    let engine = TransformEngine::new(frame);
    let mut result = Array2::zeros((bound.nrows(), FREE_SIZE));
    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, row)| {
            let free_vec = engine.bound_to_free_vector(trf, mask, &bound_row(bound.row(i)));
            write_row(row, &free_vec);
        });
    Ok(result)
}

/// Output shape `(n, 8, 6)`.
pub fn bound_to_free_jacobian_batch<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    bound: &ArrayView2<f64>,
) -> Result<Array3<f64>>
where
    F: CoordinateFrame + Sync,
    M: Mask + Sync + ?Sized,
{
    check_columns("bound vectors", bound, BOUND_SIZE)?;
    debug!(rows = bound.nrows(), "bound to free jacobian batch");

    let engine = TransformEngine::new(frame);
    let mut result = Array3::zeros((bound.nrows(), FREE_SIZE, BOUND_SIZE));
    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, out)| {
            let jac = engine.bound_to_free_jacobian(trf, mask, &bound_row(bound.row(i)));
            write_matrix(out, &jac);
        });
    Ok(result)
}

/// Output shape `(n, 6, 8)`. Rows at the poles produce non-finite entries.
pub fn free_to_bound_jacobian_batch<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    free: &ArrayView2<f64>,
) -> Result<Array3<f64>>
where
    F: CoordinateFrame + Sync,
    M: Mask + Sync + ?Sized,
{
    check_columns("free vectors", free, FREE_SIZE)?;
    debug!(rows = free.nrows(), "free to bound jacobian batch");

    let engine = TransformEngine::new(frame);
    let mut result = Array3::zeros((free.nrows(), BOUND_SIZE, FREE_SIZE));
    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, out)| {
            let jac = engine.free_to_bound_jacobian(trf, mask, &free_row(free.row(i)));
            write_matrix(out, &jac);
        });
    Ok(result)
}

/// Output shape `(n, 8)`.
pub fn free_to_path_correction_batch<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    free: &ArrayView2<f64>,
) -> Result<Array2<f64>>
where
    F: CoordinateFrame + Sync,
    M: Mask + Sync + ?Sized,
{
    check_columns("free vectors", free, FREE_SIZE)?;
    debug!(rows = free.nrows(), "free to path correction batch");

    let engine = TransformEngine::new(frame);
    let mut result = Array2::zeros((free.nrows(), FREE_SIZE));
    result
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, row)| {
            let correction = engine.free_to_path_correction(trf, mask, &free_row(free.row(i)));
            write_row(row, &correction.transpose());
        });
    Ok(result)
}

/// Index and cause of the first row failing `check`, if any.
fn first_rejected_row<C>(free: &ArrayView2<f64>, check: C) -> Option<(usize, DomainError)>
where
    C: Fn(&FreeVector) -> std::result::Result<(), DomainError> + Sync,
{
    free.axis_iter(Axis(0))
        .into_par_iter()
        .enumerate()
        .filter_map(|(row, values)| check(&free_row(values)).err().map(|source| (row, source)))
        .min_by_key(|(row, _)| *row)
}

/// Like [`free_to_bound_jacobian_batch`], but rejects the batch if any row
/// fails [`guard::check_free_vector`]. The surface normal plays no part
/// here, so tracks running inside the surface are accepted.
pub fn checked_free_to_bound_jacobian_batch<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    free: &ArrayView2<f64>,
    tol: &Tolerances,
) -> Result<Array3<f64>>
where
    F: CoordinateFrame + Sync,
    M: Mask + Sync + ?Sized,
{
    check_columns("free vectors", free, FREE_SIZE)?;

    if let Some((row, source)) = first_rejected_row(free, |v| guard::check_free_vector(v, tol)) {
        warn!(row, %source, "rejecting free vector batch");
        return Err(TransportError::Domain { row, source });
    }

    free_to_bound_jacobian_batch(frame, trf, mask, free)
}

/// Like [`free_to_path_correction_batch`], but rejects the batch if any row
/// is non-finite or crosses the surface at less than the accepted incidence.
pub fn checked_free_to_path_correction_batch<F, M>(
    frame: &F,
    trf: &Transform3,
    mask: &M,
    free: &ArrayView2<f64>,
    tol: &Tolerances,
) -> Result<Array2<f64>>
where
    F: CoordinateFrame + Sync,
    M: Mask + Sync + ?Sized,
{
    check_columns("free vectors", free, FREE_SIZE)?;

    let rejected = first_rejected_row(free, |v| {
        guard::check_incidence(frame, trf, mask, v, tol).map(|_| ())
    });
    if let Some((row, source)) = rejected {
        warn!(row, %source, "rejecting free vector batch");
        return Err(TransportError::Domain { row, source });
    }

    free_to_path_correction_batch(frame, trf, mask, free)
}
