//! # pulsar-fade
//!
//! Stateless fade function.
//! Normalizes a timestamp against the live range, shapes it with the
//! configured curve, and scales the result into the intensity bounds.

pub mod curve;
pub mod formula;

pub use formula::{fade, fade_breakdown, normalize, FadeBreakdown};
