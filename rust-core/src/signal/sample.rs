//! Element types a signal can carry

use num_complex::Complex;
use std::fmt::Debug;
use std::ops::{Add, Mul};

/// Numeric sample of a discrete-time signal
///
/// Real signals are the common case; complex samples are accepted so the
/// same stepper can explain convolution of analytic or modulated sequences.
pub trait Sample: Copy + PartialEq + Debug + Add<Output = Self> + Mul<Output = Self> {
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// True when no component is NaN or infinite
    fn is_finite(&self) -> bool;
}

impl Sample for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Sample for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Sample for Complex<f64> {
    #[inline]
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    #[inline]
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Complex::is_finite(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_finiteness() {
        assert!(Sample::is_finite(&1.5_f64));
        assert!(!Sample::is_finite(&f64::NAN));
        assert!(!Sample::is_finite(&f32::INFINITY));
    }

    #[test]
    fn test_complex_finiteness() {
        assert!(Sample::is_finite(&Complex::new(1.0, -2.0)));
        assert!(!Sample::is_finite(&Complex::new(0.0, f64::NEG_INFINITY)));
        assert_eq!(<Complex<f64> as Sample>::zero(), Complex::new(0.0, 0.0));
    }
}
