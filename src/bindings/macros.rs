// src/bindings/macros.rs

/// PyFunction binding generator for the batch conversions.
///
/// Usage:
/// `create_binding!(python_name, rust_fn_path, [x, rotation, translation(, mask)], ReturnArray);`
///
/// The surface is passed from Python as a 3×3 rotation plus a length-3
/// translation. Variants taking a mask bind the unbounded one.
macro_rules! create_binding {
    // (x, rotation, translation) -> Array2<f64>
    ($py_fn_name:ident, $rust_fn:path, [x, rotation, translation], PyArray2) => {
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            x: numpy::PyReadonlyArray2<f64>,
            rotation: numpy::PyReadonlyArray2<f64>,
            translation: numpy::PyReadonlyArray1<f64>,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray2<f64>> {
            let trf = $crate::bindings::transform_from_arrays(
                &rotation.as_array(),
                &translation.as_array(),
            )?;
            let result = $rust_fn(&$crate::coordinates::Cartesian2, &trf, &x.as_array())
                .map_err($crate::bindings::to_py_err)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };

    // (x, rotation, translation, mask) -> Array2<f64>
    ($py_fn_name:ident, $rust_fn:path, [x, rotation, translation, mask], PyArray2) => {
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            x: numpy::PyReadonlyArray2<f64>,
            rotation: numpy::PyReadonlyArray2<f64>,
            translation: numpy::PyReadonlyArray1<f64>,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray2<f64>> {
            let trf = $crate::bindings::transform_from_arrays(
                &rotation.as_array(),
                &translation.as_array(),
            )?;
            let result = $rust_fn(
                &$crate::coordinates::Cartesian2,
                &trf,
                &$crate::geometry::Unbounded,
                &x.as_array(),
            )
            .map_err($crate::bindings::to_py_err)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };

    // (x, rotation, translation, mask) -> Array3<f64>
    ($py_fn_name:ident, $rust_fn:path, [x, rotation, translation, mask], PyArray3) => {
        #[pyo3::prelude::pyfunction]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            x: numpy::PyReadonlyArray2<f64>,
            rotation: numpy::PyReadonlyArray2<f64>,
            translation: numpy::PyReadonlyArray1<f64>,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray3<f64>> {
            let trf = $crate::bindings::transform_from_arrays(
                &rotation.as_array(),
                &translation.as_array(),
            )?;
            let result = $rust_fn(
                &$crate::coordinates::Cartesian2,
                &trf,
                &$crate::geometry::Unbounded,
                &x.as_array(),
            )
            .map_err($crate::bindings::to_py_err)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };
}
