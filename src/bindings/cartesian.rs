use crate::bindings::{to_py_err, transform_from_arrays};
use crate::coordinates::Cartesian2;
use crate::geometry::Unbounded;
use crate::guard::Tolerances;
use crate::ops::batch;
use numpy::{IntoPyArray, PyArray2, PyArray3, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyModule;

create_binding!(
    cartesian_free_to_bound,
    batch::free_to_bound_batch,
    [x, rotation, translation],
    PyArray2
);
create_binding!(
    cartesian_bound_to_free,
    batch::bound_to_free_batch,
    [x, rotation, translation, mask],
    PyArray2
);
create_binding!(
    cartesian_bound_to_free_jacobian,
    batch::bound_to_free_jacobian_batch,
    [x, rotation, translation, mask],
    PyArray3
);
create_binding!(
    cartesian_free_to_bound_jacobian,
    batch::free_to_bound_jacobian_batch,
    [x, rotation, translation, mask],
    PyArray3
);
create_binding!(
    cartesian_free_to_path_correction,
    batch::free_to_path_correction_batch,
    [x, rotation, translation, mask],
    PyArray2
);

#[pyfunction]
#[pyo3(signature = (x, rotation, translation, min_sin_theta=1e-6, unit_norm=1e-6))]
pub fn cartesian_checked_free_to_bound_jacobian<'py>(
    py: Python<'py>,
    x: PyReadonlyArray2<f64>,
    rotation: PyReadonlyArray2<f64>,
    translation: PyReadonlyArray1<f64>,
    min_sin_theta: f64,
    unit_norm: f64,
) -> PyResult<&'py PyArray3<f64>> {
    let trf = transform_from_arrays(&rotation.as_array(), &translation.as_array())?;
    let tol = Tolerances::default()
        .with_min_sin_theta(min_sin_theta)
        .with_unit_norm(unit_norm);
    let result = batch::checked_free_to_bound_jacobian_batch(
        &Cartesian2,
        &trf,
        &Unbounded,
        &x.as_array(),
        &tol,
    )
    .map_err(to_py_err)?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
#[pyo3(signature = (x, rotation, translation, min_cos_incidence=1e-6))]
pub fn cartesian_checked_free_to_path_correction<'py>(
    py: Python<'py>,
    x: PyReadonlyArray2<f64>,
    rotation: PyReadonlyArray2<f64>,
    translation: PyReadonlyArray1<f64>,
    min_cos_incidence: f64,
) -> PyResult<&'py PyArray2<f64>> {
    let trf = transform_from_arrays(&rotation.as_array(), &translation.as_array())?;
    let tol = Tolerances::default().with_min_cos_incidence(min_cos_incidence);
    let result = batch::checked_free_to_path_correction_batch(
        &Cartesian2,
        &trf,
        &Unbounded,
        &x.as_array(),
        &tol,
    )
    .map_err(to_py_err)?;
    Ok(result.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cartesian_free_to_bound, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_bound_to_free, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_bound_to_free_jacobian, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_free_to_bound_jacobian, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_free_to_path_correction, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_checked_free_to_bound_jacobian, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_checked_free_to_path_correction, m)?)?;
    Ok(())
}
