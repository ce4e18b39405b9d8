//! Axis layout for stem plots of signals and their convolution
//!
//! The dashboard draws x(n), h(n), every shifted response and y(n) on
//! shared axes; this module computes those axes so the plots line up.

use crate::error::SignalError;
use crate::signal::{dense_span, Sample, Signal};

/// Allowed range for the y-axis maximum
pub const Y_MAX_RANGE: (f64, f64) = (1.0, 100.0);

/// Plot configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Upper y-axis limit shared by all plots
    pub y_max: f64,

    /// Empty samples shown on each side of the x-axis
    pub margin: i64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            y_max: 10.0,
            margin: 2,
        }
    }
}

impl PlotConfig {
    /// Check `y_max` against `Y_MAX_RANGE` and that `margin` is not negative
    ///
    /// # Returns
    /// `SignalError::InvalidPlotConfig` describing the first bad field
    pub fn validate(&self) -> Result<(), SignalError> {
        let (lo, hi) = Y_MAX_RANGE;
        if !(lo..=hi).contains(&self.y_max) {
            return Err(SignalError::InvalidPlotConfig(format!(
                "y_max {} outside [{}, {}]",
                self.y_max, lo, hi
            )));
        }
        if self.margin < 0 {
            return Err(SignalError::InvalidPlotConfig(format!(
                "negative margin {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// x-axis limits and tick positions
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLimits {
    /// Left edge, margin included
    pub min: i64,

    /// Right edge, margin included
    pub max: i64,

    /// One tick per sample index
    pub ticks: Vec<i64>,
}

/// Axis for a single signal: (start - margin, start + len + margin)
pub fn signal_limits<T: Sample>(signal: &Signal<T>, config: &PlotConfig) -> AxisLimits {
    let len = i64::try_from(signal.len()).unwrap_or(i64::MAX);
    AxisLimits {
        min: signal.start().saturating_sub(config.margin),
        max: signal.start().saturating_add(len).saturating_add(config.margin),
        ticks: signal.indices().collect(),
    }
}

/// Shared layout for x(n), h(n) and y(n) = x(n) * h(n)
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    /// Axis for x(n) alone
    pub x: AxisLimits,

    /// Axis for h(n) alone
    pub h: AxisLimits,

    /// Axis covering x(n), h(n) and y(n), used for the step plots
    pub global: AxisLimits,

    /// Upper y-axis limit from the config
    pub y_max: f64,
}

impl PlotLayout {
    /// Lay out the axes for a pair of signals
    ///
    /// # Arguments
    /// * `x` - Input signal x(n)
    /// * `h` - Impulse response h(n)
    /// * `config` - y-axis limit and x-axis margin
    ///
    /// # Errors
    /// Invalid config, signals whose indices overflow i64, or a global
    /// span wider than `MAX_DENSE_SPAN` ticks
    pub fn new<T: Sample>(x: &Signal<T>, h: &Signal<T>, config: &PlotConfig) -> Result<Self, SignalError> {
        config.validate()?;
        x.validate("x(n)", false)?;
        h.validate("h(n)", false)?;

        // y spans [start_x + start_h, end_x + end_h] when both are non-empty
        let y_span = match (x.end(), h.end()) {
            (Some(end_x), Some(end_h)) => Some((
                x.start().saturating_add(h.start()),
                end_x.saturating_add(end_h),
            )),
            _ => None,
        };

        let spans = [
            x.end().map(|end| (x.start(), end)),
            h.end().map(|end| (h.start(), end)),
            y_span,
        ];
        let (lo, hi) = spans
            .iter()
            .flatten()
            .fold(None, |acc: Option<(i64, i64)>, &(s, e)| match acc {
                Some((lo, hi)) => Some((lo.min(s), hi.max(e))),
                None => Some((s, e)),
            })
            .unwrap_or((0, 0));

        // One tick per index: refuse spans that cannot be listed
        dense_span(lo, hi)?;

        Ok(Self {
            x: signal_limits(x, config),
            h: signal_limits(h, config),
            global: AxisLimits {
                min: lo.saturating_sub(config.margin),
                max: hi.saturating_add(config.margin),
                ticks: (lo..=hi).collect(),
            },
            y_max: config.y_max,
        })
    }
}
