//! Python bindings for the convolution stepper

use pyo3::prelude::*;
use pyo3::exceptions::PyIndexError;
use crate::convolution::{ConvolutionStepper, Flip, Step, StepKind, StepperConfig};
use super::signal_bindings::{to_py_err, PySignal};

/// Flip choice exposed to Python
#[pyclass(name = "Flip")]
#[derive(Clone)]
pub enum PyFlip {
    Second,
    First,
}

impl From<PyFlip> for Flip {
    fn from(py_flip: PyFlip) -> Self {
        match py_flip {
            PyFlip::Second => Flip::Second,
            PyFlip::First => Flip::First,
        }
    }
}

/// One step of the convolution walk
#[pyclass(name = "Step")]
#[derive(Clone)]
pub struct PyStep {
    #[pyo3(get)]
    pub index: usize,
    /// "accumulate" or "finalize"
    #[pyo3(get)]
    pub kind: String,
    #[pyo3(get)]
    pub shift: i64,
    #[pyo3(get)]
    pub output_index: i64,
    /// (k, fixed[k], flipped[n-k], product) tuples
    #[pyo3(get)]
    pub terms: Vec<(i64, f64, f64, f64)>,
    #[pyo3(get)]
    pub partial_sum: f64,
    #[pyo3(get)]
    pub finalized: Vec<f64>,
}

impl From<Step<f64>> for PyStep {
    fn from(step: Step<f64>) -> Self {
        Self {
            index: step.index,
            kind: match step.kind {
                StepKind::Accumulate => "accumulate",
                StepKind::Finalize => "finalize",
            }
            .to_string(),
            shift: step.shift,
            output_index: step.output_index,
            terms: step
                .terms
                .iter()
                .map(|t| (t.k, t.fixed, t.flipped, t.product))
                .collect(),
            partial_sum: step.partial_sum,
            finalized: step.finalized,
        }
    }
}

#[pymethods]
impl PyStep {
    fn __repr__(&self) -> String {
        format!(
            "Step(index={}, kind={}, output_index={}, partial_sum={})",
            self.index, self.kind, self.output_index, self.partial_sum
        )
    }
}

/// Convolution stepper exposed to Python
///
/// Holds no cursor: the dashboard keeps the current step number and asks
/// for steps by index.
#[pyclass(name = "ConvolutionStepper")]
pub struct PyConvolutionStepper {
    stepper: ConvolutionStepper,
}

#[pymethods]
impl PyConvolutionStepper {
    /// Create a stepper
    ///
    /// Args:
    ///     a: First signal
    ///     b: Second signal
    ///     flip: Signal to flip and slide (default: Flip.Second)
    ///     per_term: One step per product instead of per output (default: False)
    ///     require_finite: Reject NaN and infinity (default: True)
    ///
    /// Raises:
    ///     ValueError: on invalid input
    #[new]
    #[pyo3(signature = (a, b, flip=PyFlip::Second, per_term=false, require_finite=true))]
    fn new(
        a: PySignal,
        b: PySignal,
        flip: PyFlip,
        per_term: bool,
        require_finite: bool,
    ) -> PyResult<Self> {
        let config = StepperConfig {
            flip: flip.into(),
            per_term,
            require_finite,
        };

        ConvolutionStepper::new(a.signal, b.signal, config)
            .map(|stepper| Self { stepper })
            .map_err(to_py_err)
    }

    /// Full convolution result
    fn compute(&self) -> PySignal {
        self.stepper.compute().into()
    }

    /// Total number of steps
    fn step_count(&self) -> usize {
        self.stepper.step_count()
    }

    /// Step at index, or None past the end
    fn step_at(&self, index: usize) -> Option<PyStep> {
        self.stepper.step_at(index).map(PyStep::from)
    }

    /// All steps in order
    fn steps(&self) -> Vec<PyStep> {
        self.stepper.steps().map(PyStep::from).collect()
    }

    fn __len__(&self) -> usize {
        self.stepper.step_count()
    }

    /// Supports negative indices like a list
    fn __getitem__(&self, index: isize) -> PyResult<PyStep> {
        let count = self.stepper.step_count() as isize;
        let resolved = if index < 0 { index + count } else { index };

        if resolved < 0 {
            return Err(PyErr::new::<PyIndexError, _>("step index out of range"));
        }

        self.stepper
            .step_at(resolved as usize)
            .map(PyStep::from)
            .ok_or_else(|| PyErr::new::<PyIndexError, _>("step index out of range"))
    }
}
