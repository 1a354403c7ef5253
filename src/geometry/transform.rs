use crate::definitions::{Point3, RotationMatrix, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placement of a surface: maps its local 3D frame into the global frame.
///
/// The rotation columns are the local x, y and z axes expressed in global
/// coordinates, the translation is the local origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform3 {
    rotation: RotationMatrix,
    translation: Vector3,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3 {
    pub fn identity() -> Self {
        Self {
            rotation: RotationMatrix::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Builds the frame from its normal (`z_axis`) and first tangent (`x_axis`).
    ///
    /// Both axes are normalised and `y = z × x`. The caller guarantees the
    /// two axes are orthogonal.
    pub fn new(translation: Vector3, z_axis: Vector3, x_axis: Vector3) -> Self {
        let z = z_axis.normalize();
        let x = x_axis.normalize();
        let y = z.cross(&x);
        Self {
            rotation: RotationMatrix::from_columns(&[x, y, z]),
            translation,
        }
    }

    pub fn from_rotation(translation: Vector3, rotation: RotationMatrix) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    #[inline]
    pub fn rotation(&self) -> &RotationMatrix {
        &self.rotation
    }

    #[inline]
    pub fn translation(&self) -> &Vector3 {
        &self.translation
    }

    #[inline]
    pub fn point_to_local(&self, p: &Point3) -> Point3 {
        self.rotation.tr_mul(&(p - self.translation))
    }

    #[inline]
    pub fn point_to_global(&self, p: &Point3) -> Point3 {
        self.rotation * p + self.translation
    }

    #[inline]
    pub fn vector_to_local(&self, v: &Vector3) -> Vector3 {
        self.rotation.tr_mul(v)
    }

    #[inline]
    pub fn vector_to_global(&self, v: &Vector3) -> Vector3 {
        self.rotation * v
    }
}
