//! Sliding-window geometry shared by the direct and stepped convolution
//!
//! For output index n the flipped signal g is reversed and slid so that
//! g[n-k] lines up under f[k]. The overlap is the closed interval
//! max(f.start, n - g.end) <= k <= min(f.end, n - g.start).

use crate::error::SignalError;
use crate::signal::{Sample, Signal};

/// One product f[k] * g[n-k] contributing to an output sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<T> {
    /// Index into the signal that stays in place
    pub k: i64,

    /// f[k]
    pub fixed: T,

    /// g[n-k], read from the flipped and shifted signal
    pub flipped: T,

    /// f[k] * g[n-k]
    pub product: T,
}

/// Fixed/flipped pair with a known non-empty output span
pub(crate) struct SlidingWindow<'s, T> {
    fixed: &'s Signal<T>,
    flipped: &'s Signal<T>,
    fixed_end: i64,
    flipped_end: i64,
    first_output: i64,
    last_output: i64,
}

impl<'s, T: Sample> SlidingWindow<'s, T> {
    /// Returns `Ok(None)` when either signal is empty
    ///
    /// Both signals must already be validated individually.
    pub fn new(fixed: &'s Signal<T>, flipped: &'s Signal<T>) -> Result<Option<Self>, SignalError> {
        let (fixed_end, flipped_end) = match (fixed.end(), flipped.end()) {
            (Some(f), Some(g)) => (f, g),
            _ => return Ok(None),
        };

        let overflow = || SignalError::IndexOverflow {
            start: fixed.start().saturating_add(flipped.start()),
            len: fixed.len() + flipped.len() - 1,
        };
        let first_output = fixed.start().checked_add(flipped.start()).ok_or_else(overflow)?;
        let last_output = fixed_end.checked_add(flipped_end).ok_or_else(overflow)?;

        Ok(Some(Self {
            fixed,
            flipped,
            fixed_end,
            flipped_end,
            first_output,
            last_output,
        }))
    }

    /// First output index
    pub fn first_output(&self) -> i64 {
        self.first_output
    }

    /// Number of output samples
    pub fn output_len(&self) -> usize {
        self.fixed.len() + self.flipped.len() - 1
    }

    /// Output indices in increasing order
    pub fn outputs(&self) -> impl Iterator<Item = i64> {
        self.first_output..=self.last_output
    }

    /// Closed range of k for output index n, `None` when nothing overlaps
    #[inline]
    pub fn overlap(&self, n: i64) -> Option<(i64, i64)> {
        let lo = self.fixed.start().max(n.saturating_sub(self.flipped_end));
        let hi = self.fixed_end.min(n.saturating_sub(self.flipped.start()));
        (lo <= hi).then_some((lo, hi))
    }

    /// Number of terms contributing to output index n
    pub fn term_count(&self, n: i64) -> usize {
        self.overlap(n).map_or(0, |(lo, hi)| (hi - lo) as usize + 1)
    }

    /// Product term for alignment n at position k
    ///
    /// k must lie inside `overlap(n)`.
    #[inline]
    pub fn term(&self, n: i64, k: i64) -> Term<T> {
        let fixed = self.fixed.values()[(k - self.fixed.start()) as usize];
        let flipped = self.flipped.values()[(n - k - self.flipped.start()) as usize];
        Term {
            k,
            fixed,
            flipped,
            product: fixed * flipped,
        }
    }

    /// Terms for output index n in increasing k
    pub fn terms(&self, n: i64) -> impl Iterator<Item = Term<T>> + '_ {
        let (lo, hi) = self.overlap(n).unwrap_or((1, 0));
        (lo..=hi).map(move |k| self.term(n, k))
    }

    /// y[n], summed from zero in increasing k
    pub fn output(&self, n: i64) -> T {
        self.terms(n).fold(T::zero(), |acc, t| acc + t.product)
    }
}
