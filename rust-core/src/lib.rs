//! SignalLab - Discrete Convolution Core
//! 
//! Step-by-step discrete convolution engine behind the SignalLab dashboard,
//! with Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod signal;
pub mod convolution;
pub mod plot;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::SignalError;
pub use signal::{Sample, Signal};
pub use convolution::{compute, ConvolutionStepper, Flip, Step, StepKind, StepperConfig, Term};
pub use plot::{PlotConfig, PlotLayout};
