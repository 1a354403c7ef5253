use crate::definitions::{Point2, Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape descriptor of a surface, handed to the frame variants untouched.
///
/// Planar frames never look inside it. Curved frames read their radius or
/// similar metadata from it.
pub trait Mask {
    /// Whether a local point lies on the surface, with `tolerance` slack on each edge.
    fn is_inside(&self, local: &Point2, tolerance: Scalar) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unbounded;

impl Mask for Unbounded {
    #[inline]
    fn is_inside(&self, _local: &Point2, _tolerance: Scalar) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle2 {
    pub half_x: Scalar,
    pub half_y: Scalar,
}

impl Rectangle2 {
    pub fn new(half_x: Scalar, half_y: Scalar) -> Self {
        Self { half_x, half_y }
    }
}

impl Mask for Rectangle2 {
    #[inline]
    fn is_inside(&self, local: &Point2, tolerance: Scalar) -> bool {
        local[0].abs() <= self.half_x + tolerance && local[1].abs() <= self.half_y + tolerance
    }
}

/// Symmetric trapezoid: the half width in x runs linearly from
/// `half_x_min_y` at `y = -half_y` to `half_x_max_y` at `y = +half_y`.
///
/// With `half_y == 0` the trapezoid collapses onto the x axis and the wider
/// of the two half widths applies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trapezoid2 {
    pub half_x_min_y: Scalar,
    pub half_x_max_y: Scalar,
    pub half_y: Scalar,
}

impl Trapezoid2 {
    pub fn new(half_x_min_y: Scalar, half_x_max_y: Scalar, half_y: Scalar) -> Self {
        Self {
            half_x_min_y,
            half_x_max_y,
            half_y,
        }
    }

    #[inline]
    fn half_x_at(&self, y: Scalar) -> Scalar {
        if self.half_y == 0.0 {
            return self.half_x_min_y.max(self.half_x_max_y);
        }
        let slope = (self.half_x_max_y - self.half_x_min_y) / (2.0 * self.half_y);
        self.half_x_min_y + slope * (y + self.half_y)
    }
}

impl Mask for Trapezoid2 {
    #[inline]
    fn is_inside(&self, local: &Point2, tolerance: Scalar) -> bool {
        local[1].abs() <= self.half_y + tolerance
            && local[0].abs() <= self.half_x_at(local[1]) + tolerance
    }
}
