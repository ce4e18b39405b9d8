//! Plot layout helpers for the dashboard

pub mod layout;
pub mod labels;

pub use layout::{signal_limits, AxisLimits, PlotConfig, PlotLayout};
pub use labels::{impulse_label, shifted_label};
