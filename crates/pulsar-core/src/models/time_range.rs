use serde::{Deserialize, Serialize};

use super::Timestamp;

/// The (oldest, newest) timestamp pair over every live item.
///
/// Invariant: `oldest <= newest`, and both values belong to some tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub oldest: Timestamp,
    pub newest: Timestamp,
}

impl TimeRange {
    /// A zero-width range holding a single instant.
    pub fn point(ts: Timestamp) -> Self {
        Self {
            oldest: ts,
            newest: ts,
        }
    }

    /// Build a range from two bounds, ordering them if needed.
    pub fn new(a: Timestamp, b: Timestamp) -> Self {
        Self {
            oldest: a.min(b),
            newest: a.max(b),
        }
    }

    /// `newest - oldest` as a float. Zero means every item shares one instant.
    pub fn width(&self) -> f64 {
        self.newest as f64 - self.oldest as f64
    }

    /// True when every item shares one instant.
    pub fn is_degenerate(&self) -> bool {
        self.oldest == self.newest
    }

    /// Whether `ts` sits on either bound.
    pub fn is_extreme(&self, ts: Timestamp) -> bool {
        ts == self.oldest || ts == self.newest
    }

    /// Widen the range to include `ts`. Returns `true` if a bound moved.
    pub fn extend(&mut self, ts: Timestamp) -> bool {
        if ts < self.oldest {
            self.oldest = ts;
            true
        } else if ts > self.newest {
            self.newest = ts;
            true
        } else {
            false
        }
    }
}

/// Outcome of a registry mutation with respect to the global range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeChange {
    /// Both bounds are exactly as before. Only the touched item's value can differ.
    Unchanged,
    /// At least one bound moved, or the registry crossed the empty/non-empty boundary.
    Changed,
}

impl RangeChange {
    /// Compare two range states.
    pub fn between(before: Option<TimeRange>, after: Option<TimeRange>) -> Self {
        if before == after {
            Self::Unchanged
        } else {
            Self::Changed
        }
    }

    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}
