//! Discrete-time signal model

pub mod sample;
pub mod sequence;
pub mod parse;

pub use sample::Sample;
pub use sequence::{dense_span, Signal, MAX_DENSE_SPAN};
pub use parse::parse_samples;
