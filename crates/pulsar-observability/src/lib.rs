//! # pulsar-observability
//!
//! Tracing subscriber setup and the structured events emitted by the
//! freshness cache (rebuilds, range recalculations, config changes, ticks).

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
