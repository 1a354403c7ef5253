//! Planar frame: projection, round trip and derivative consistency.

use super::{random_plane, random_unit, rng, SAMPLES};
use crate::coordinates::{Cartesian2, CoordinateFrame};
use crate::definitions::*;
use crate::geometry::{Mask, Rectangle2, Transform3, Trapezoid2, Unbounded};
use approx::assert_relative_eq;
use rand::Rng;

const EPSILON: f64 = 1e-9;

#[test]
fn test_projections_keep_first_two_components() {
    let frame = Cartesian2;
    assert_eq!(
        frame.project_3d_to_local(&Point3::new(1.5, -2.0, 7.0)),
        Point2::new(1.5, -2.0)
    );
    assert_eq!(
        frame.local_to_local_point(&Point2::new(3.0, 4.0)),
        Point2::new(3.0, 4.0)
    );
}

#[test]
fn test_local_to_global_lies_on_plane() {
    let trf = Transform3::new(
        Vector3::new(0.0, 0.0, 5.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 0.0),
    );
    let global = Cartesian2.local_to_global(&trf, &Unbounded, &Point2::new(1.0, 2.0), &Vector3::z());
    assert_relative_eq!(global, Point3::new(1.0, 2.0, 5.0), epsilon = EPSILON);
}

#[test]
fn test_global_to_local_ignores_normal_offset() {
    // points off the plane project along the normal
    let trf = Transform3::identity();
    let local = Cartesian2.global_to_local(&trf, &Point3::new(3.0, -1.0, 42.0), &Vector3::x());
    assert_relative_eq!(local, Point2::new(3.0, -1.0), epsilon = EPSILON);
}

#[test]
fn test_roundtrip_on_random_planes() {
    let mut rng = rng();
    let rect = Rectangle2::new(20.0, 10.0);
    let trap = Trapezoid2::new(5.0, 15.0, 10.0);

    for _ in 0..SAMPLES {
        let trf = random_plane(&mut rng);
        let dir = random_unit(&mut rng);
        let p = Point2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-10.0..10.0));
        assert!(rect.is_inside(&p, 0.0) && trap.is_inside(&p, 0.0));

        let g = Cartesian2.local_to_global(&trf, &rect, &p, &dir);
        assert_relative_eq!(Cartesian2.global_to_local(&trf, &g, &dir), p, epsilon = EPSILON);

        let g = Cartesian2.local_to_global(&trf, &trap, &p, &dir);
        assert_relative_eq!(Cartesian2.global_to_local(&trf, &g, &dir), p, epsilon = EPSILON);
    }
}

#[test]
fn test_reference_frame_is_plane_rotation() {
    let mut rng = rng();
    for _ in 0..20 {
        let trf = random_plane(&mut rng);
        let frame = Cartesian2.reference_frame(
            &trf,
            &Unbounded,
            &Point3::new(1.0, 2.0, 3.0),
            &random_unit(&mut rng),
        );
        assert_eq!(frame, *trf.rotation());
        assert_relative_eq!(frame.transpose() * frame, RotationMatrix::identity(), epsilon = 1e-12);
    }
}

#[test]
fn test_position_derivatives_are_transposes() {
    let mut rng = rng();
    for _ in 0..SAMPLES {
        let trf = random_plane(&mut rng);
        let pos = Point3::new(
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
            rng.gen_range(-50.0..50.0),
        );
        let dir = random_unit(&mut rng);

        let to_free = Cartesian2.bound_pos_to_free_pos_derivative(&trf, &Unbounded, &pos, &dir);
        let to_bound = Cartesian2.free_pos_to_bound_pos_derivative(&trf, &Unbounded, &pos, &dir);
        assert_eq!(to_bound, to_free.transpose());

        // the tangents are orthonormal, so the pair composes to the 2×2 identity
        assert_relative_eq!(to_bound * to_free, MatrixType::<2, 2>::identity(), epsilon = 1e-12);
    }
}
