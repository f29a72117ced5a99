//! # pulsar-cache
//!
//! Temporal freshness cache.
//! The identity registry tracks each item's last-modified time and the live
//! range; the derived cache memoizes each item's intensity behind a single
//! dirty flag; the engine wires mutation events to the invalidation protocol.

pub mod derived;
pub mod engine;
pub mod metrics;
pub mod registry;

pub use derived::DerivedCache;
pub use engine::{FreshnessEngine, TickReport};
pub use metrics::CacheMetrics;
pub use registry::IdentityRegistry;
