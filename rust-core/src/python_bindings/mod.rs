//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod signal_bindings;
mod stepper_bindings;
mod decomposition_bindings;

/// Python module definition
#[pymodule]
fn signallab(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<signal_bindings::PySignal>()?;
    m.add_class::<stepper_bindings::PyConvolutionStepper>()?;
    m.add_class::<stepper_bindings::PyStep>()?;
    m.add_class::<decomposition_bindings::PyShiftedResponse>()?;
    m.add_class::<decomposition_bindings::PyPlotLayout>()?;

    // Add Flip enum
    m.add_class::<stepper_bindings::PyFlip>()?;

    m.add_function(wrap_pyfunction!(signal_bindings::convolve, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::parse_signal, m)?)?;
    m.add_function(wrap_pyfunction!(decomposition_bindings::decompose, m)?)?;
    m.add_function(wrap_pyfunction!(decomposition_bindings::shifted_responses, m)?)?;
    m.add_function(wrap_pyfunction!(decomposition_bindings::impulse_label, m)?)?;
    m.add_function(wrap_pyfunction!(decomposition_bindings::shifted_label, m)?)?;

    Ok(())
}
