pub mod bound;
pub mod covariance;
pub mod free;
pub mod helper;

pub use self::bound::BoundTrackParameters;
pub use self::covariance::{bound_to_free_covariance, free_to_bound_covariance, transport_covariance};
pub use self::free::FreeTrackParameters;
