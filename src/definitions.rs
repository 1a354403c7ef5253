//! Track parametrization indices and the fixed-size algebra types built on them.

use nalgebra::{Matrix3, SMatrix, SVector, Vector2, Vector3 as NVector3};

pub type Scalar = f64;

pub type Point2 = Vector2<Scalar>;
pub type Point3 = NVector3<Scalar>;
pub type Vector3 = NVector3<Scalar>;
pub type RotationMatrix = Matrix3<Scalar>;

pub type MatrixType<const R: usize, const C: usize> = SMatrix<Scalar, R, C>;

// Bound parameters: local frame of one surface.
pub const BOUND_LOC0: usize = 0;
pub const BOUND_LOC1: usize = 1;
pub const BOUND_PHI: usize = 2;
pub const BOUND_THETA: usize = 3;
pub const BOUND_TIME: usize = 4;
pub const BOUND_QOVERP: usize = 5;
pub const BOUND_SIZE: usize = 6;

// Free parameters: global frame.
pub const FREE_POS0: usize = 0;
pub const FREE_POS1: usize = 1;
pub const FREE_POS2: usize = 2;
pub const FREE_TIME: usize = 3;
pub const FREE_DIR0: usize = 4;
pub const FREE_DIR1: usize = 5;
pub const FREE_DIR2: usize = 6;
pub const FREE_QOVERP: usize = 7;
pub const FREE_SIZE: usize = 8;

pub type BoundVector = SVector<Scalar, BOUND_SIZE>;
pub type BoundMatrix = MatrixType<BOUND_SIZE, BOUND_SIZE>;
pub type FreeVector = SVector<Scalar, FREE_SIZE>;
pub type FreeMatrix = MatrixType<FREE_SIZE, FREE_SIZE>;
pub type BoundToFreeMatrix = MatrixType<FREE_SIZE, BOUND_SIZE>;
pub type FreeToBoundMatrix = MatrixType<BOUND_SIZE, FREE_SIZE>;
pub type FreeToPathMatrix = MatrixType<1, FREE_SIZE>;

enum BlockFits<
    const R: usize,
    const C: usize,
    const BR: usize,
    const BC: usize,
    const ROW: usize,
    const COL: usize,
> {}

impl<
        const R: usize,
        const C: usize,
        const BR: usize,
        const BC: usize,
        const ROW: usize,
        const COL: usize,
    > BlockFits<R, C, BR, BC, ROW, COL>
{
    const OK: () = assert!(
        ROW + BR <= R && COL + BC <= C,
        "sub-block does not fit into the target matrix"
    );
}

/// Sub-block access at a fixed `(ROW, COL)` offset.
///
/// The offset is part of the type, so writing a block that would overrun the
/// target matrix fails to compile instead of panicking at run time:
///
/// ```
/// use frame_transport::definitions::*;
///
/// let mut jac = BoundToFreeMatrix::zeros();
/// let block = MatrixType::<3, 2>::repeat(1.0);
/// At::<FREE_POS0, BOUND_LOC0>::set_block(&mut jac, &block);
/// assert_eq!(jac[(FREE_POS2, BOUND_LOC1)], 1.0);
/// ```
pub struct At<const ROW: usize, const COL: usize>;

impl<const ROW: usize, const COL: usize> At<ROW, COL> {
    #[inline]
    pub fn set_block<const R: usize, const C: usize, const BR: usize, const BC: usize>(
        target: &mut MatrixType<R, C>,
        block: &MatrixType<BR, BC>,
    ) {
        #[allow(clippy::let_unit_value)]
        let () = BlockFits::<R, C, BR, BC, ROW, COL>::OK;
        target.fixed_view_mut::<BR, BC>(ROW, COL).copy_from(block);
    }

    #[inline]
    pub fn block<const R: usize, const C: usize, const BR: usize, const BC: usize>(
        source: &MatrixType<R, C>,
    ) -> MatrixType<BR, BC> {
        #[allow(clippy::let_unit_value)]
        let () = BlockFits::<R, C, BR, BC, ROW, COL>::OK;
        source.fixed_view::<BR, BC>(ROW, COL).into_owned()
    }
}
