use crate::coordinates::CoordinateFrame;
use crate::definitions::*;
use crate::geometry::{Mask, Transform3};

/// Planar frame: local coordinates are the surface's own x and y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cartesian2;

impl CoordinateFrame for Cartesian2 {
    #[inline]
    fn local_to_local_point(&self, local2: &Point2) -> Point2 {
        Point2::new(local2[0], local2[1])
    }

    #[inline]
    fn project_3d_to_local(&self, local3: &Point3) -> Point2 {
        Point2::new(local3[0], local3[1])
    }

    #[inline]
    fn global_to_local(&self, trf: &Transform3, pos: &Point3, _dir: &Vector3) -> Point2 {
        let local3 = trf.point_to_local(pos);
        self.project_3d_to_local(&local3)
    }

    #[inline]
    fn local_to_global<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        _mask: &M,
        local: &Point2,
        _dir: &Vector3,
    ) -> Point3 {
        trf.point_to_global(&Point3::new(local[0], local[1], 0.0))
    }

    /// The plane's rotation, independent of position and direction.
    #[inline]
    fn reference_frame<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        _mask: &M,
        _pos: &Point3,
        _dir: &Vector3,
    ) -> RotationMatrix {
        *trf.rotation()
    }
}
