use crate::coordinates::CoordinateFrame;
use crate::definitions::*;
use crate::geometry::{Mask, Transform3};
use crate::tracks::helper;

/// Bound/free parameter conversions and their Jacobians.
///
/// Shape agnostic: only the position blocks come from the frame variant, the
/// time, direction and q/p rows are filled here for every surface type.
///
/// # Domain
///
/// * `theta` must lie strictly inside `(0, π)`. At the poles the free→bound
///   angular block divides by `sin(theta) = 0`.
/// * The path correction divides by the cosine between the track direction
///   and the surface normal, which vanishes for tracks running inside the
///   surface.
///
/// Neither case is caught here. The results carry IEEE infinities or NaNs;
/// see [`crate::guard`] for checks callers can run upstream.
#[derive(Debug, Clone, Copy)]
pub struct TransformEngine<'a, F> {
    frame: &'a F,
}

impl<'a, F: CoordinateFrame> TransformEngine<'a, F> {
    pub fn new(frame: &'a F) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &'a F {
        self.frame
    }

    pub fn free_to_bound_vector(&self, trf: &Transform3, free_vec: &FreeVector) -> BoundVector {
        let pos = helper::free_pos(free_vec);
        let dir = helper::free_dir(free_vec);

        let local = self.frame.global_to_local(trf, &pos, &dir);

        let mut bound_vec = BoundVector::zeros();
        bound_vec[BOUND_LOC0] = local[0];
        bound_vec[BOUND_LOC1] = local[1];
        bound_vec[BOUND_PHI] = helper::phi(&dir);
        bound_vec[BOUND_THETA] = helper::theta(&dir);
        bound_vec[BOUND_TIME] = free_vec[FREE_TIME];
        bound_vec[BOUND_QOVERP] = free_vec[FREE_QOVERP];
        bound_vec
    }

    pub fn bound_to_free_vector<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        bound_vec: &BoundVector,
    ) -> FreeVector {
        let local = helper::bound_local(bound_vec);
        let dir = helper::bound_dir(bound_vec);

        let pos = self.frame.local_to_global(trf, mask, &local, &dir);

        let mut free_vec = FreeVector::zeros();
        helper::set_free_pos(&mut free_vec, &pos);
        free_vec[FREE_TIME] = bound_vec[BOUND_TIME];
        helper::set_free_dir(&mut free_vec, &dir);
        free_vec[FREE_QOVERP] = bound_vec[BOUND_QOVERP];
        free_vec
    }

    pub fn bound_to_free_jacobian<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        bound_vec: &BoundVector,
    ) -> BoundToFreeMatrix {
        let mut jac_to_global = BoundToFreeMatrix::zeros();

        let (sin_theta, cos_theta) = bound_vec[BOUND_THETA].sin_cos();
        let (sin_phi, cos_phi) = bound_vec[BOUND_PHI].sin_cos();

        let local = helper::bound_local(bound_vec);
        let dir = helper::bound_dir(bound_vec);
        let pos = self.frame.local_to_global(trf, mask, &local, &dir);

        // d(x, y, z) / d(loc0, loc1)
        let pos_derivative = self
            .frame
            .bound_pos_to_free_pos_derivative(trf, mask, &pos, &dir);
        At::<FREE_POS0, BOUND_LOC0>::set_block(&mut jac_to_global, &pos_derivative);

        jac_to_global[(FREE_TIME, BOUND_TIME)] = 1.0;

        // d(dx, dy, dz) / d(phi, theta)
        jac_to_global[(FREE_DIR0, BOUND_PHI)] = -sin_theta * sin_phi;
        jac_to_global[(FREE_DIR0, BOUND_THETA)] = cos_theta * cos_phi;
        jac_to_global[(FREE_DIR1, BOUND_PHI)] = sin_theta * cos_phi;
        jac_to_global[(FREE_DIR1, BOUND_THETA)] = cos_theta * sin_phi;
        jac_to_global[(FREE_DIR2, BOUND_THETA)] = -sin_theta;

        jac_to_global[(FREE_QOVERP, BOUND_QOVERP)] = 1.0;

        jac_to_global
    }

    /// Requires `sin(theta) != 0`, see the type-level docs.
    pub fn free_to_bound_jacobian<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        free_vec: &FreeVector,
    ) -> FreeToBoundMatrix {
        let mut jac_to_local = FreeToBoundMatrix::zeros();

        let pos = helper::free_pos(free_vec);
        let dir = helper::free_dir(free_vec);

        let (sin_theta, cos_theta) = helper::theta(&dir).sin_cos();
        let (sin_phi, cos_phi) = helper::phi(&dir).sin_cos();

        // d(loc0, loc1) / d(x, y, z)
        let pos_derivative = self
            .frame
            .free_pos_to_bound_pos_derivative(trf, mask, &pos, &dir);
        At::<BOUND_LOC0, FREE_POS0>::set_block(&mut jac_to_local, &pos_derivative);

        jac_to_local[(BOUND_TIME, FREE_TIME)] = 1.0;

        // d(phi, theta) / d(dx, dy, dz)
        jac_to_local[(BOUND_PHI, FREE_DIR0)] = -sin_phi / sin_theta;
        jac_to_local[(BOUND_PHI, FREE_DIR1)] = cos_phi / sin_theta;
        jac_to_local[(BOUND_THETA, FREE_DIR0)] = cos_phi * cos_theta;
        jac_to_local[(BOUND_THETA, FREE_DIR1)] = sin_phi * cos_theta;
        jac_to_local[(BOUND_THETA, FREE_DIR2)] = -sin_theta;

        jac_to_local[(BOUND_QOVERP, FREE_QOVERP)] = 1.0;

        jac_to_local
    }

    /// First-order change of path length when the position is perturbed
    /// while the track stays on the surface.
    ///
    /// Undefined for tracks parallel to the surface (`normal · dir == 0`).
    pub fn free_to_path_correction<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        free_vec: &FreeVector,
    ) -> FreeToPathMatrix {
        let mut free_to_path = FreeToPathMatrix::zeros();

        let pos = helper::free_pos(free_vec);
        let dir = helper::free_dir(free_vec);

        let frame = self.frame.reference_frame(trf, mask, &pos, &dir);
        let ref_z_axis: MatrixType<3, 1> = At::<0, 2>::block(&frame);

        // cosine between the momentum direction and the frame normal
        let dz = ref_z_axis.dot(&dir);

        let correction_term = -1.0 / dz * ref_z_axis.transpose();
        At::<0, FREE_POS0>::set_block(&mut free_to_path, &correction_term);

        free_to_path
    }

    /// `J_f2b · (1 + dfds · C_path)`: the free→bound Jacobian with the
    /// path-length constraint folded in.
    ///
    /// `dfds` is the derivative of the free vector with respect to path
    /// length at the surface, as provided by the stepper.
    pub fn free_to_bound_jacobian_with_path_correction<M: Mask + ?Sized>(
        &self,
        trf: &Transform3,
        mask: &M,
        free_vec: &FreeVector,
        dfds: &FreeVector,
    ) -> FreeToBoundMatrix {
        let jac_to_local = self.free_to_bound_jacobian(trf, mask, free_vec);
        let path_correction = self.free_to_path_correction(trf, mask, free_vec);
        let constrained = FreeMatrix::identity() + dfds * path_correction;
        jac_to_local * constrained
    }
}
