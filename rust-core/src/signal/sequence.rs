//! Finite discrete-time signal anchored at an arbitrary index

use super::sample::Sample;
use crate::error::SignalError;

/// Widest index span laid out as a dense buffer (plot ticks, superposition)
pub const MAX_DENSE_SPAN: usize = 1 << 24;

/// Number of indices in the closed span [first, last]
///
/// # Returns
/// Span length, or `SignalError::SpanTooWide` when it overflows or exceeds
/// `MAX_DENSE_SPAN`
pub fn dense_span(first: i64, last: i64) -> Result<usize, SignalError> {
    let too_wide = SignalError::SpanTooWide { first, last };

    // last - first may not fit in i64 when the two ends have opposite signs
    let width = (last as i128) - (first as i128) + 1;
    match usize::try_from(width) {
        Ok(len) if len <= MAX_DENSE_SPAN => Ok(len),
        _ => Err(too_wide),
    }
}

/// Finite sequence x[n] defined for n = start..start+len-1
///
/// Outside its support the signal is zero. An empty signal is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T = f64> {
    values: Vec<T>,
    start: i64,
}

impl<T: Sample> Signal<T> {
    /// Create a signal whose first sample sits at index `start`
    pub fn new(values: Vec<T>, start: i64) -> Self {
        Self { values, start }
    }

    /// Signal with no samples
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Unit impulse δ(n - index)
    pub fn impulse(index: i64) -> Self {
        Self::new(vec![T::one()], index)
    }

    /// Sample values in index order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Index of the first sample
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Index of the last sample, `None` when empty
    pub fn end(&self) -> Option<i64> {
        let last = i64::try_from(self.values.len().checked_sub(1)?).ok()?;
        self.start.checked_add(last)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the signal has no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at absolute index `n`, `None` outside the support
    #[inline]
    pub fn value_at(&self, n: i64) -> Option<T> {
        let offset = usize::try_from(n.checked_sub(self.start)?).ok()?;
        self.values.get(offset).copied()
    }

    /// Iterate `(index, value)` pairs in index order
    ///
    /// The signal must pass `validate` first; otherwise indices past
    /// i64::MAX overflow.
    pub fn iter(&self) -> impl Iterator<Item = (i64, T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (self.start + i as i64, v))
    }

    /// Absolute indices of the support
    pub fn indices(&self) -> impl Iterator<Item = i64> + '_ {
        self.iter().map(|(n, _)| n)
    }

    /// Check that the signal can take part in a convolution
    ///
    /// # Arguments
    /// * `name` - Name used in the error message (e.g. "x(n)")
    /// * `require_finite` - Reject NaN and infinite samples
    pub fn validate(&self, name: &'static str, require_finite: bool) -> Result<(), SignalError> {
        // Last index must be representable
        if !self.is_empty() && self.end().is_none() {
            return Err(SignalError::IndexOverflow {
                start: self.start,
                len: self.len(),
            });
        }

        if require_finite {
            if let Some((index, value)) = self.iter().find(|(_, v)| !v.is_finite()) {
                log::debug!("rejecting {}: non-finite sample at index {}", name, index);
                return Err(SignalError::NonFinite {
                    signal: name,
                    index,
                    value: format!("{:?}", value),
                });
            }
        }

        Ok(())
    }
}

impl Signal<f64> {
    /// Build a real signal from comma-separated text such as "1, 2, 1"
    pub fn parse(text: &str, start: i64) -> Result<Self, SignalError> {
        Ok(Self::new(super::parse::parse_samples(text)?, start))
    }
}

impl<T: Sample> Default for Signal<T> {
    fn default() -> Self {
        Self::empty()
    }
}
