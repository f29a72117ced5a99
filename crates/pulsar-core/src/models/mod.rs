pub mod fade_curve;
pub mod time_range;
pub mod timestamp;

pub use fade_curve::FadeCurve;
pub use time_range::{RangeChange, TimeRange};
pub use timestamp::Timestamp;
