//! Single-lever sensitivity analysis.
//!
//! A sweep applies one lever at evenly spaced magnitudes and records the
//! aggregate profit, revenue and margin at each point:
//!
//! ```ignore
//! use bizsim_core::analysis::{SweepConfig, SensitivityParameter, sweep};
//!
//! let curve = sweep(&dataset, SensitivityParameter::Price, &SweepConfig::default());
//! assert_eq!(curve.len(), 9);
//! ```
//!
//! The string-keyed `sensitivity_analysis` entry point mirrors the
//! presentation layer's contract: an unknown parameter name yields an empty
//! curve rather than an error.

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
