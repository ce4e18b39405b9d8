//! Python bindings for impulse decomposition and plot layout

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::convolution::{decompose as decompose_signal, shifted_responses as shifted, ShiftedResponse};
use crate::plot::{self, AxisLimits, PlotConfig, PlotLayout};
use super::signal_bindings::{to_py_err, PySignal};

/// x(i) h(n - i) exposed to Python
#[pyclass(name = "ShiftedResponse")]
#[derive(Clone)]
pub struct PyShiftedResponse {
    #[pyo3(get)]
    pub shift: i64,
    #[pyo3(get)]
    pub coefficient: f64,
    #[pyo3(get)]
    pub response: PySignal,
}

impl From<ShiftedResponse<f64>> for PyShiftedResponse {
    fn from(r: ShiftedResponse<f64>) -> Self {
        Self {
            shift: r.shift,
            coefficient: r.coefficient,
            response: r.response.into(),
        }
    }
}

/// Split a signal into (index, amplitude) unit impulses
///
/// Raises:
///     ValueError: if the signal's indices overflow
#[pyfunction]
pub fn decompose(x: PySignal) -> PyResult<Vec<(i64, f64)>> {
    let impulses = decompose_signal(&x.signal).map_err(to_py_err)?;
    Ok(impulses
        .into_iter()
        .map(|imp| (imp.index, imp.amplitude))
        .collect())
}

/// One scaled, shifted copy of h per sample of x
#[pyfunction]
pub fn shifted_responses(x: PySignal, h: PySignal) -> PyResult<Vec<PyShiftedResponse>> {
    shifted(&x.signal, &h.signal)
        .map(|responses| responses.into_iter().map(PyShiftedResponse::from).collect())
        .map_err(to_py_err)
}

/// LaTeX caption x(i)\,\delta(n - i)
#[pyfunction]
#[pyo3(signature = (i, signal="x"))]
pub fn impulse_label(i: i64, signal: &str) -> String {
    plot::impulse_label(signal, i)
}

/// LaTeX caption x(i)\,h(n - i)
#[pyfunction]
#[pyo3(signature = (i, signal="x", kernel="h"))]
pub fn shifted_label(i: i64, signal: &str, kernel: &str) -> String {
    plot::shifted_label(signal, kernel, i)
}

/// Shared plot axes exposed to Python
#[pyclass(name = "PlotLayout")]
pub struct PyPlotLayout {
    layout: PlotLayout,
}

fn limits_tuple(limits: &AxisLimits) -> (i64, i64) {
    (limits.min, limits.max)
}

#[pymethods]
impl PyPlotLayout {
    /// Compute axes for x(n), h(n) and their convolution
    ///
    /// Args:
    ///     x: Input signal
    ///     h: Impulse response
    ///     y_max: Y-axis maximum, 1 to 100 (default: 10.0)
    ///     margin: Samples of padding on each side (default: 2)
    #[new]
    #[pyo3(signature = (x, h, y_max=10.0, margin=2))]
    fn new(x: PySignal, h: PySignal, y_max: f64, margin: i64) -> PyResult<Self> {
        let config = PlotConfig { y_max, margin };
        PlotLayout::new(&x.signal, &h.signal, &config)
            .map(|layout| Self { layout })
            .map_err(to_py_err)
    }

    /// (xmin, xmax) for the x(n) plot
    #[getter]
    fn x_limits(&self) -> (i64, i64) {
        limits_tuple(&self.layout.x)
    }

    /// (xmin, xmax) for the h(n) plot
    #[getter]
    fn h_limits(&self) -> (i64, i64) {
        limits_tuple(&self.layout.h)
    }

    /// (xmin, xmax) shared by the step and result plots
    #[getter]
    fn global_limits(&self) -> (i64, i64) {
        limits_tuple(&self.layout.global)
    }

    fn x_ticks<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        PyArray1::from_slice(py, &self.layout.x.ticks)
    }

    fn h_ticks<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        PyArray1::from_slice(py, &self.layout.h.ticks)
    }

    fn global_ticks<'py>(&self, py: Python<'py>) -> &'py PyArray1<i64> {
        PyArray1::from_slice(py, &self.layout.global.ticks)
    }

    #[getter]
    fn y_max(&self) -> f64 {
        self.layout.y_max
    }
}
