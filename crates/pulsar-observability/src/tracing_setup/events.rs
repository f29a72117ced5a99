//! Structured log events for cache lifecycle operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a full rebuild of the derived cache.
pub fn cache_rebuilt(entries: usize, rebuild_count: u64) {
    tracing::debug!(
        event = "cache_rebuilt",
        entries = entries,
        rebuild_count = rebuild_count,
        "derived cache rebuilt"
    );
}

/// Log an O(n) rescan of the registry range.
pub fn range_recalculated(items: usize, oldest: Option<i64>, newest: Option<i64>) {
    tracing::debug!(
        event = "range_recalculated",
        items = items,
        oldest = ?oldest,
        newest = ?newest,
        "registry range recalculated"
    );
}

/// Log a fade configuration change.
pub fn config_changed(curve: &str, min_intensity: f64, max_intensity: f64) {
    tracing::info!(
        event = "config_changed",
        curve = %curve,
        min_intensity = min_intensity,
        max_intensity = max_intensity,
        "fade configuration changed"
    );
}

/// Log the registry bootstrap pass.
pub fn bootstrap_completed(items: usize) {
    tracing::info!(
        event = "bootstrap_completed",
        items = items,
        "registry bootstrapped"
    );
}

/// Log a render tick.
pub fn tick_applied(applied: usize, skipped: usize) {
    tracing::trace!(
        event = "tick_applied",
        applied = applied,
        skipped = skipped,
        "intensities written to surface"
    );
}
