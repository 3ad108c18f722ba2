//! Command-line front-end for the business scenario simulator
//!
//! Loads a sales CSV and an optional YAML configuration, then hands the data
//! to `bizsim_core` and renders the results as text or JSON.

// ============================================================================
// Input
// ============================================================================

pub mod config;
pub mod data;

// ============================================================================
// Output and diagnostics
// ============================================================================

pub mod logging;
pub mod output;

pub use config::{default_data_dir, load_config};
pub use data::{LoadError, load_dataset};
pub use logging::init_logging;
