//! Shared fixtures for the coordinate frame tests.

mod cartesian2_test;

use crate::definitions::*;
use crate::geometry::Transform3;
use crate::tracks::helper;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(crate) const SAMPLES: usize = 200;

pub(crate) fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_f4a3)
}

pub(crate) fn random_unit(rng: &mut StdRng) -> Vector3 {
    let phi = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
    let cos_theta: f64 = rng.gen_range(-1.0..1.0);
    helper::dir_from_angles(phi, cos_theta.acos())
}

/// Plane with random orientation and an offset of up to 100 units.
pub(crate) fn random_plane(rng: &mut StdRng) -> Transform3 {
    let z = random_unit(rng);
    let seed = random_unit(rng);
    let x = seed - z * z.dot(&seed);
    let t = Vector3::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    );
    Transform3::new(t, z, x)
}

/// Bound vector away from the poles, inside a 20×20 rectangle.
pub(crate) fn random_bound(rng: &mut StdRng) -> BoundVector {
    BoundVector::from_column_slice(&[
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-3.0..3.0),
        rng.gen_range(0.2..2.9),
        rng.gen_range(0.0..50.0),
        rng.gen_range(-1.0..1.0),
    ])
}
