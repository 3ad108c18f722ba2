//! Integration tests for the scenario simulation engine
//!
//! Tests are organized by topic:
//! - `transforms` - Single-lever transformers and the profit invariant
//! - `composer` - Custom scenario composition order
//! - `comparator` - Aggregate deltas, margin guards and recommendation tiers
//! - `monte_carlo` - Risk simulation statistics and reproducibility
//! - `sensitivity` - Lever sweeps
//! - `simulator` - Stateful simulator and quick scenario presets
//! - `logging` - Trace events from transformers and sweeps


mod monte_carlo;
mod sensitivity;
