use crate::distance_measure::{Euclidean, Manhattan, Metric};
use crate::error::WdtwError;
use crate::interface::Parameters;
use crate::wdtw::WeightedDtw;
use crate::window::Window;
use numpy::{PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::convert::TryFrom;

type LibDataType = f32;

fn value_error(error: WdtwError) -> PyErr {
    PyValueError::new_err(error.to_string())
}

/// Fills `costs` in place. `costs` must be a writable array that shares no
/// memory with the inputs.
#[pyfunction]
fn weighted_euclidean<'py>(
    x1: PyReadonlyArray2<'py, LibDataType>,
    x2: PyReadonlyArray2<'py, LibDataType>,
    w: PyReadonlyArray1<'py, LibDataType>,
    window: i64,
    costs: &'py PyArray2<LibDataType>,
) -> PyResult<()> {
    let window = Window::try_from(window).map_err(value_error)?;
    let costs = unsafe { costs.as_array_mut() };

    WeightedDtw::<LibDataType, Euclidean>::new(window)
        .fill(x1.as_array(), x2.as_array(), w.as_array(), costs)
        .map_err(value_error)
}

#[pyfunction(window = "None", metric = "\"euclidean\"")]
fn wdtw_distance<'py>(
    x1: PyReadonlyArray2<'py, LibDataType>,
    x2: PyReadonlyArray2<'py, LibDataType>,
    w: PyReadonlyArray1<'py, LibDataType>,
    window: Option<usize>,
    metric: &str,
) -> PyResult<LibDataType> {
    let metric: Metric = metric
        .parse()
        .map_err(|e: anyhow::Error| PyValueError::new_err(e.to_string()))?;
    let parameters = Parameters { window, metric };
    let (x1, x2, w) = (x1.as_array(), x2.as_array(), w.as_array());

    let distance = match parameters.metric {
        Metric::Euclidean => {
            WeightedDtw::<LibDataType, Euclidean>::from_parameters(&parameters).distance(x1, x2, w)
        }
        Metric::Manhattan => {
            WeightedDtw::<LibDataType, Manhattan>::from_parameters(&parameters).distance(x1, x2, w)
        }
    };
    distance.map_err(value_error)
}

#[pymodule]
fn wdtw_rs(_py: Python, m: &PyModule) -> PyResult<()> {
    let _ = env_logger::try_init();

    m.add_function(wrap_pyfunction!(weighted_euclidean, m)?)?;
    m.add_function(wrap_pyfunction!(wdtw_distance, m)?)?;

    Ok(())
}
