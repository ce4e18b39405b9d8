//! Impulse decomposition views of a convolution
//!
//! x(n) = Σ_i x(i) δ(n - i), so by linearity and shift invariance
//! y(n) = Σ_i x(i) h(n - i): one scaled, shifted copy of h per sample of x.

use crate::error::SignalError;
use crate::signal::{dense_span, Sample, Signal};

/// Scaled unit impulse x(i) δ(n - i)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse<T> {
    pub index: i64,
    pub amplitude: T,
}

impl<T: Sample> Impulse<T> {
    /// The impulse as a one-sample signal
    pub fn to_signal(&self) -> Signal<T> {
        Signal::new(vec![self.amplitude], self.index)
    }
}

/// Response of h to one impulse of x: x(i) h(n - i)
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftedResponse<T> {
    /// i
    pub shift: i64,

    /// x(i)
    pub coefficient: T,

    /// x(i) h(n - i), starting at h.start + i
    pub response: Signal<T>,
}

/// Split a signal into scaled unit impulses, one per sample
///
/// # Errors
/// `SignalError::IndexOverflow` when the signal's indices run past i64::MAX
pub fn decompose<T: Sample>(x: &Signal<T>) -> Result<Vec<Impulse<T>>, SignalError> {
    x.validate("x(n)", false)?;

    Ok(x.iter()
        .map(|(index, amplitude)| Impulse { index, amplitude })
        .collect())
}

/// Scaled and shifted copies of `h`, one per sample of `x`
///
/// # Errors
/// Non-finite samples or shifted indices that overflow i64
pub fn shifted_responses<T: Sample>(
    x: &Signal<T>,
    h: &Signal<T>,
) -> Result<Vec<ShiftedResponse<T>>, SignalError> {
    x.validate("x(n)", true)?;
    h.validate("h(n)", true)?;

    x.iter()
        .map(|(shift, coefficient)| -> Result<ShiftedResponse<T>, SignalError> {
            let start = h.start().checked_add(shift).ok_or(SignalError::IndexOverflow {
                start: h.start(),
                len: h.len(),
            })?;
            let values = h.values().iter().map(|&v| coefficient * v).collect();
            let response = Signal::new(values, start);
            response.validate("x(i) h(n - i)", false)?;

            Ok(ShiftedResponse {
                shift,
                coefficient,
                response,
            })
        })
        .collect()
}

/// Sample-wise sum of shifted responses
///
/// Responses are added in the order given, so passing the output of
/// `shifted_responses` reproduces the direct convolution y = x * h.
///
/// # Errors
/// `IndexOverflow` for a response whose indices run past i64::MAX,
/// `SpanTooWide` when the responses cover more than `MAX_DENSE_SPAN` indices
pub fn superpose<T: Sample>(responses: &[ShiftedResponse<T>]) -> Result<Signal<T>, SignalError> {
    let mut bounds: Option<(i64, i64)> = None;
    for r in responses {
        r.response.validate("x(i) h(n - i)", false)?;

        // Empty responses do not widen the output
        if let Some(end) = r.response.end() {
            let start = r.response.start();
            bounds = Some(match bounds {
                Some((first, last)) => (first.min(start), last.max(end)),
                None => (start, end),
            });
        }
    }

    let (first, last) = match bounds {
        Some(b) => b,
        None => return Ok(Signal::empty()),
    };

    let mut values = vec![T::zero(); dense_span(first, last)?];
    for r in responses {
        for (n, v) in r.response.iter() {
            let slot = &mut values[(n - first) as usize];
            *slot = *slot + v;
        }
    }

    Ok(Signal::new(values, first))
}
