//! Direct (time-domain) discrete convolution
//!
//! y[n] = Σ_k a[k] * b[n-k], evaluated over the closed overlap for every
//! output index. O(len(a) * len(b)).

use super::window::SlidingWindow;
use crate::error::SignalError;
use crate::signal::{Sample, Signal};

/// Full convolution of `a` and `b`, rejecting non-finite samples
///
/// # Returns
/// Signal of length len(a) + len(b) - 1 starting at a.start + b.start,
/// or an empty signal when either input is empty
pub fn compute<T: Sample>(a: &Signal<T>, b: &Signal<T>) -> Result<Signal<T>, SignalError> {
    compute_with(a, b, true)
}

/// Full convolution with explicit finite-only mode
pub fn compute_with<T: Sample>(
    a: &Signal<T>,
    b: &Signal<T>,
    require_finite: bool,
) -> Result<Signal<T>, SignalError> {
    a.validate("a", require_finite)?;
    b.validate("b", require_finite)?;

    let result = match SlidingWindow::new(a, b)? {
        Some(window) => convolve(&window),
        None => Signal::empty(),
    };

    log::debug!(
        "convolved {} x {} samples -> {} samples starting at {}",
        a.len(),
        b.len(),
        result.len(),
        result.start()
    );

    Ok(result)
}

/// Evaluate every output sample of a validated window
pub(crate) fn convolve<T: Sample>(window: &SlidingWindow<'_, T>) -> Signal<T> {
    let mut values = Vec::with_capacity(window.output_len());
    values.extend(window.outputs().map(|n| window.output(n)));
    Signal::new(values, window.first_output())
}
