#[macro_use]
mod macros;

mod cartesian;

use crate::definitions::{RotationMatrix, Vector3};
use crate::error::TransportError;
use crate::geometry::Transform3;
use ndarray::{ArrayView1, ArrayView2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

pub(crate) fn to_py_err(err: TransportError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn transform_from_arrays(
    rotation: &ArrayView2<f64>,
    translation: &ArrayView1<f64>,
) -> PyResult<Transform3> {
    if rotation.dim() != (3, 3) {
        return Err(PyValueError::new_err(format!(
            "rotation must be 3x3, got {:?}",
            rotation.shape()
        )));
    }
    if translation.len() != 3 {
        return Err(PyValueError::new_err(format!(
            "translation must have 3 entries, got {}",
            translation.len()
        )));
    }
    let rot = RotationMatrix::from_fn(|r, c| rotation[[r, c]]);
    let t = Vector3::new(translation[0], translation[1], translation[2]);
    Ok(Transform3::from_rotation(t, rot))
}

/// Surface frame transforms and bound/free Jacobians.
#[pymodule]
pub fn frame_transport(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // Planar surfaces
    cartesian::register(m)?;
    Ok(())
}
