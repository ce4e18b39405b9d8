//! Input validation errors
//!
//! Every check runs before a convolution starts, so a request either fails
//! up front or completes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Signal {signal} has a non-finite sample {value} at index {index}")]
    NonFinite {
        signal: &'static str,
        index: i64,
        value: String,
    },

    #[error("Signal starting at index {start} with {len} samples overflows the index range")]
    IndexOverflow { start: i64, len: usize },

    #[error("Index span [{first}, {last}] is too wide to lay out sample by sample")]
    SpanTooWide { first: i64, last: i64 },

    #[error("Invalid sample {token:?} at position {position}")]
    Parse { position: usize, token: String },

    #[error("Invalid plot configuration: {0}")]
    InvalidPlotConfig(String),
}
