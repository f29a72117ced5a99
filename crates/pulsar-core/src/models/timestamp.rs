use chrono::{DateTime, Utc};

/// Last-modification instant of an item, in milliseconds since the Unix epoch.
///
/// Values are taken as-is from the host. Nothing in the workspace validates
/// them; an out-of-range value is the caller's problem.
pub type Timestamp = i64;

/// Convert a UTC datetime to a [`Timestamp`].
pub fn from_datetime(at: DateTime<Utc>) -> Timestamp {
    at.timestamp_millis()
}
