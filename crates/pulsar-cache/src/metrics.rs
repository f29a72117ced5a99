use serde::Serialize;

/// Counters describing how much work the cache has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheMetrics {
    /// Full O(n) rebuilds of the derived mapping.
    pub full_rebuilds: u64,
    /// Single-entry recomputations on the incremental path.
    pub incremental_updates: u64,
    /// Calls that marked the whole cache dirty.
    pub invalidations: u64,
    /// Entries dropped because their key left the registry.
    pub evictions: u64,
    /// O(n) rescans of the registry range.
    pub range_recalculations: u64,
}

impl CacheMetrics {
    /// Share of recomputations served incrementally, in `[0, 1]`.
    pub fn incremental_ratio(&self) -> f64 {
        let total = self.incremental_updates + self.full_rebuilds;
        if total == 0 {
            return 0.0;
        }
        self.incremental_updates as f64 / total as f64
    }
}
