//! Python bindings for signals and direct convolution

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::error::SignalError;
use crate::signal::Signal;
use crate::convolution::compute;

/// Validation failures surface as ValueError
pub(crate) fn to_py_err(err: SignalError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Discrete-time signal exposed to Python
#[pyclass(name = "Signal")]
#[derive(Clone)]
pub struct PySignal {
    pub(crate) signal: Signal,
}

impl From<Signal> for PySignal {
    fn from(signal: Signal) -> Self {
        Self { signal }
    }
}

#[pymethods]
impl PySignal {
    /// Create a signal
    ///
    /// Args:
    ///     values: Samples as numpy array
    ///     start: Index of the first sample (default: 0)
    #[new]
    #[pyo3(signature = (values, start=0))]
    fn new(values: PyReadonlyArray1<f64>, start: i64) -> Self {
        let values = values.as_array().iter().copied().collect();
        Signal::new(values, start).into()
    }

    /// Parse comma-separated samples, e.g. "1,2,1"
    #[staticmethod]
    #[pyo3(signature = (text, start=0))]
    fn parse(text: &str, start: i64) -> PyResult<Self> {
        Signal::parse(text, start).map(Self::from).map_err(to_py_err)
    }

    /// Index of the first sample
    #[getter]
    fn start(&self) -> i64 {
        self.signal.start()
    }

    /// Index of the last sample (None when empty)
    #[getter]
    fn end(&self) -> Option<i64> {
        self.signal.end()
    }

    /// Sample values as numpy array
    fn values<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_slice(py, self.signal.values())
    }

    /// Sample indices as numpy array
    ///
    /// Raises:
    ///     ValueError: if the indices overflow
    fn indices<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<i64>> {
        self.signal.validate("signal", false).map_err(to_py_err)?;
        Ok(PyArray1::from_vec(py, self.signal.indices().collect()))
    }

    /// Sample at absolute index n (0.0 outside the support)
    fn value_at(&self, n: i64) -> f64 {
        self.signal.value_at(n).unwrap_or(0.0)
    }

    fn __len__(&self) -> usize {
        self.signal.len()
    }

    fn __repr__(&self) -> String {
        format!("Signal(values={:?}, start={})", self.signal.values(), self.signal.start())
    }
}

/// Full convolution y = a * b
///
/// Raises:
///     ValueError: if either signal contains NaN or infinity
#[pyfunction]
pub fn convolve(a: PySignal, b: PySignal) -> PyResult<PySignal> {
    compute(&a.signal, &b.signal).map(PySignal::from).map_err(to_py_err)
}

/// Parse comma-separated samples into a signal
#[pyfunction]
#[pyo3(signature = (text, start=0))]
pub fn parse_signal(text: &str, start: i64) -> PyResult<PySignal> {
    PySignal::parse(text, start)
}
