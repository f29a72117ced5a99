//! IdentityRegistry: key → last-modified timestamp, plus the live range.
//!
//! New extremes tighten the range in O(1). Losing an extreme (removing it, or
//! moving it inward) can only be resolved by rescanning the remaining items,
//! so that O(n) cost is confined to those cases.

use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

use pulsar_core::{RangeChange, TimeRange, Timestamp};
use pulsar_observability::tracing_setup::events;

/// Tracks every live item's timestamp and the (oldest, newest) pair over them.
///
/// An empty registry has no range (`range()` returns `None`) rather than a
/// sentinel pair.
#[derive(Debug, Clone)]
pub struct IdentityRegistry<K = String> {
    items: HashMap<K, Timestamp>,
    range: Option<TimeRange>,
    recalculations: u64,
}

impl<K> Default for IdentityRegistry<K> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            range: None,
            recalculations: 0,
        }
    }
}

impl<K: Eq + Hash + Clone> IdentityRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the timestamp for `key`.
    ///
    /// Reports [`RangeChange::Changed`] if either bound moved. When the
    /// replaced value held a bound and the new value moves away from it, the
    /// range is rescanned before returning.
    pub fn upsert(&mut self, key: K, timestamp: Timestamp) -> RangeChange {
        let before = self.range;
        let prior = self.items.insert(key, timestamp);

        let lost_extreme = match self.range.as_mut() {
            None => {
                self.range = Some(TimeRange::point(timestamp));
                false
            }
            Some(range) => {
                let lost = prior.is_some_and(|p| {
                    (p == range.oldest && timestamp > p) || (p == range.newest && timestamp < p)
                });
                range.extend(timestamp);
                lost
            }
        };

        if lost_extreme {
            self.recalculate();
        }

        RangeChange::between(before, self.range)
    }

    /// Delete `key`.
    ///
    /// Returns `true` when the removed timestamp sat on either bound. The
    /// range is then possibly too wide and the caller must call
    /// [`recalculate`](Self::recalculate). Removing the last item empties the
    /// range directly.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(removed) = self.items.remove(key) else {
            return false;
        };
        let was_extreme = self.range.is_some_and(|r| r.is_extreme(removed));
        if self.items.is_empty() {
            self.range = None;
        }
        was_extreme
    }

    /// Rescan every item and rebuild the range from scratch. O(n).
    pub fn recalculate(&mut self) -> RangeChange {
        let before = self.range;
        self.range = self.items.values().fold(None, |acc, &ts| {
            Some(match acc {
                None => TimeRange::point(ts),
                Some(mut range) => {
                    range.extend(ts);
                    range
                }
            })
        });
        self.recalculations += 1;

        events::range_recalculated(
            self.items.len(),
            self.range.map(|r| r.oldest),
            self.range.map(|r| r.newest),
        );
        RangeChange::between(before, self.range)
    }

    /// Move an item to a new key: remove under `old_key`, then upsert under
    /// `new_key`. The range is exact on return.
    pub fn rename<Q>(
        &mut self,
        old_key: &Q,
        new_key: K,
        timestamp: Timestamp,
    ) -> RangeChange
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let before = self.range;
        if self.remove(old_key) {
            self.recalculate();
        }
        self.upsert(new_key, timestamp);
        RangeChange::between(before, self.range)
    }

    pub fn timestamp<Q>(&self, key: &Q) -> Option<Timestamp>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.get(key).copied()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.items.contains_key(key)
    }

    /// Current (oldest, newest), or `None` when nothing is tracked.
    pub fn range(&self) -> Option<TimeRange> {
        self.range
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, Timestamp> {
        self.items.iter()
    }

    /// Number of full range rescans performed so far.
    pub fn recalculations(&self) -> u64 {
        self.recalculations
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.range = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(items: &[(&str, Timestamp)]) -> IdentityRegistry {
        let mut reg = IdentityRegistry::new();
        for &(k, ts) in items {
            reg.upsert(k.to_string(), ts);
        }
        reg
    }

    #[test]
    fn first_upsert_sets_point_range() {
        let mut reg = IdentityRegistry::new();
        assert!(reg.upsert("a".to_string(), 5).is_changed());
        assert_eq!(reg.range(), Some(TimeRange::point(5)));
    }

    #[test]
    fn interior_upsert_keeps_range() {
        let mut reg = registry(&[("a", 0), ("b", 100)]);
        assert_eq!(reg.upsert("c".to_string(), 50), RangeChange::Unchanged);
        assert_eq!(reg.recalculations(), 0);
    }

    #[test]
    fn moving_an_extreme_inward_rescans() {
        let mut reg = registry(&[("a", 0), ("b", 50), ("c", 100)]);
        assert!(reg.upsert("c".to_string(), 60).is_changed());
        assert_eq!(reg.range(), Some(TimeRange::new(0, 60)));
        assert_eq!(reg.recalculations(), 1);
    }

    #[test]
    fn moving_an_extreme_outward_is_o1() {
        let mut reg = registry(&[("a", 0), ("b", 100)]);
        assert!(reg.upsert("b".to_string(), 200).is_changed());
        assert_eq!(reg.range(), Some(TimeRange::new(0, 200)));
        assert_eq!(reg.recalculations(), 0);
    }

    #[test]
    fn moving_a_shared_extreme_leaves_range() {
        let mut reg = registry(&[("a", 0), ("b", 0), ("c", 100)]);
        assert_eq!(reg.upsert("a".to_string(), 40), RangeChange::Unchanged);
        assert_eq!(reg.range(), Some(TimeRange::new(0, 100)));
    }

    #[test]
    fn remove_reports_extreme() {
        let mut reg = registry(&[("a", 0), ("b", 50), ("c", 100)]);
        assert!(!reg.remove("b"));
        assert!(reg.remove("c"));
        reg.recalculate();
        assert_eq!(reg.range(), Some(TimeRange::new(0, 0)));
    }

    #[test]
    fn remove_unknown_key_is_noop() {
        let mut reg = registry(&[("a", 0)]);
        assert!(!reg.remove("zzz"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn removing_last_item_empties_range() {
        let mut reg = registry(&[("a", 7)]);
        assert!(reg.remove("a"));
        assert_eq!(reg.range(), None);
        reg.recalculate();
        assert_eq!(reg.range(), None);
    }

    #[test]
    fn readd_after_empty_starts_fresh() {
        let mut reg = registry(&[("a", 1_000)]);
        reg.remove("a");
        reg.upsert("b".to_string(), 5_000);
        assert_eq!(reg.range(), Some(TimeRange::point(5_000)));
    }

    #[test]
    fn rename_moves_timestamp() {
        let mut reg = registry(&[("a", 0), ("b", 100)]);
        let change = reg.rename("b", "c".to_string(), 100);
        assert_eq!(change, RangeChange::Unchanged);
        assert!(!reg.contains("b"));
        assert_eq!(reg.timestamp("c"), Some(100));
    }

    #[test]
    fn rename_with_new_timestamp_updates_range() {
        let mut reg = registry(&[("a", 0), ("b", 100)]);
        assert!(reg.rename("b", "c".to_string(), 300).is_changed());
        assert_eq!(reg.range(), Some(TimeRange::new(0, 300)));
    }
}
