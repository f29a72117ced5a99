//! # pulsar-core
//!
//! Foundation crate for the Pulsar freshness cache.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{FadeConfig, PulsarConfig};
pub use errors::{PulsarError, PulsarResult};
pub use models::{FadeCurve, RangeChange, TimeRange, Timestamp};
pub use traits::{ItemSource, RenderSurface};
