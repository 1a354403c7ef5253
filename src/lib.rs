//! Surface coordinate frames and the Jacobians linking bound and free track
//! parameters.
//!
//! A *bound* vector `(loc0, loc1, phi, theta, time, q/p)` lives on one
//! surface; a *free* vector `(x, y, z, time, dx, dy, dz, q/p)` lives in global
//! space. [`TransformEngine`] converts between them and builds the Jacobians
//! a Kalman-style fitter uses to carry covariances across, delegating only the
//! position blocks to a surface-specific [`CoordinateFrame`].
//!
//! ```
//! use frame_transport::prelude::*;
//!
//! let engine = TransformEngine::new(&Cartesian2);
//! let bound = BoundVector::from_column_slice(&[1.0, 2.0, 0.3, 1.2, 5.0, 0.01]);
//! let free = engine.bound_to_free_vector(&Transform3::identity(), &Unbounded, &bound);
//! assert_eq!(free[FREE_POS0], 1.0);
//! assert_eq!(free[FREE_TIME], 5.0);
//! ```

pub mod coordinates;
pub mod definitions;
pub mod error;
pub mod geometry;
pub mod guard;
pub mod ops;
pub mod tracks;

#[cfg(feature = "python")]
mod bindings;

pub use coordinates::{Cartesian2, CoordinateFrame, TransformEngine};
pub use error::TransportError;
pub use geometry::{Mask, Transform3};
pub use guard::{DomainError, Tolerances};
pub use tracks::{BoundTrackParameters, FreeTrackParameters};

pub mod prelude {
    pub use crate::coordinates::{Cartesian2, CoordinateFrame, TransformEngine};
    pub use crate::definitions::*;
    pub use crate::geometry::{Mask, Rectangle2, Transform3, Trapezoid2, Unbounded};
    pub use crate::tracks::{BoundTrackParameters, FreeTrackParameters};
}
