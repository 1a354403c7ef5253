//! Surface coordinate frames.
//!
//! A frame variant knows how one surface shape maps between its native 2D
//! local coordinates and global 3D space. [`TransformEngine`] builds the full
//! bound/free parameter conversions on top of any variant.

pub mod cartesian2;
pub mod engine;

pub use self::cartesian2::Cartesian2;
pub use self::engine::TransformEngine;

use crate::definitions::*;
use crate::geometry::{Mask, Transform3};

/// Geometric projection contract shared by all surface frame variants.
///
/// Implementations are stateless. Every method is a pure function of its
/// arguments, so one value can be shared freely between threads.
///
/// Round trip: `global_to_local(trf, &local_to_global(trf, mask, &p, &d), &d) == p`
/// for every `p` inside the mask.
pub trait CoordinateFrame {
    /// Re-expresses a point already given in this frame's 2D convention.
    fn local_to_local_point(&self, local2: &Point2) -> Point2;

    /// Projects a point of the surface's local 3D frame onto the native 2D coordinates.
    fn project_3d_to_local(&self, local3: &Point3) -> Point2;

    fn global_to_local(&self, trf: &Transform3, pos: &Point3, dir: &Vector3) -> Point2;

    fn local_to_global<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        local: &Point2,
        dir: &Vector3,
    ) -> Point3;

    /// Orthonormal basis at `pos`: columns are tangent 0, tangent 1 and the normal.
    fn reference_frame<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        pos: &Point3,
        dir: &Vector3,
    ) -> RotationMatrix;

    /// d(x, y, z) / d(loc0, loc1)
    fn bound_pos_to_free_pos_derivative<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        pos: &Point3,
        dir: &Vector3,
    ) -> MatrixType<3, 2> {
        let frame = self.reference_frame(trf, mask, pos, dir);
        At::<0, 0>::block(&frame)
    }

    /// d(loc0, loc1) / d(x, y, z), exact for planes and first order otherwise.
    fn free_pos_to_bound_pos_derivative<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        pos: &Point3,
        dir: &Vector3,
    ) -> MatrixType<2, 3> {
        let frame_t = self.reference_frame(trf, mask, pos, dir).transpose();
        At::<0, 0>::block(&frame_t)
    }
}

#[cfg(test)]
mod tests;
