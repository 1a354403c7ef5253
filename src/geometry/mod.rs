pub mod mask;
pub mod transform;

pub use self::mask::{Mask, Rectangle2, Trapezoid2, Unbounded};
pub use self::transform::Transform3;
