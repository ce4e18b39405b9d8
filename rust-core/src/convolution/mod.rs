//! Discrete convolution and its step-by-step breakdown

pub mod window;
pub mod direct;
pub mod stepper;
pub mod decomposition;

pub use window::Term;
pub use direct::{compute, compute_with};
pub use stepper::{ConvolutionStepper, Flip, Step, StepKind, StepperConfig, Steps};
pub use decomposition::{decompose, shifted_responses, superpose, Impulse, ShiftedResponse};
