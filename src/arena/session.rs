//! Session storage for games in progress.
//!
//! Orchestrators keep live games keyed by room or match id. Entries expire
//! a fixed TTL after their last write, which gives disconnected players a
//! grace period to come back. Time is passed in by the caller.

use std::hash::Hash;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::debug;

/// Keyed storage with expiry.
pub trait SessionStore<K, V> {
    /// Live entry for `key`; expired entries are not returned.
    fn get(&self, key: &K, now: Instant) -> Option<&V>;

    /// Insert or replace, restarting the entry's TTL. Returns the previous
    /// value.
    fn put(&mut self, key: K, value: V, now: Instant) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    /// Drop every entry whose TTL has passed. Returns how many were dropped.
    fn evict_expired(&mut self, now: Instant) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// `SessionStore` backed by a hash map.
#[derive(Clone, Debug)]
pub struct InMemorySessionStore<K, V> {
    ttl: Duration,
    entries: FxHashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> InMemorySessionStore<K, V> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Live values, in no particular order.
    pub fn values(&self, now: Instant) -> impl Iterator<Item = &V> {
        self.entries
            .values()
            .filter(move |e| e.expires_at > now)
            .map(|e| &e.value)
    }
}

impl<K: Eq + Hash, V> SessionStore<K, V> for InMemorySessionStore<K, V> {
    fn get(&self, key: &K, now: Instant) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|e| e.expires_at > now)
            .map(|e| &e.value)
    }

    fn put(&mut self, key: K, value: V, now: Instant) -> Option<V> {
        let entry = Entry {
            value,
            expires_at: now + self.ttl,
        };
        self.entries.insert(key, entry).map(|old| old.value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    fn evict_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.expires_at > now);
        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!(evicted, remaining = self.entries.len(), "evicted expired sessions");
        }
        evicted
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let now = Instant::now();
        let mut store = InMemorySessionStore::new(Duration::from_secs(30));

        assert_eq!(store.put("room-1", 1, now), None);
        assert_eq!(store.put("room-1", 2, now), Some(1));
        assert_eq!(store.get(&"room-1", now), Some(&2));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(&"room-1"), Some(2));
        assert!(store.is_empty());
    }

    #[test]
    fn test_expired_entries_hidden_then_evicted() {
        let start = Instant::now();
        let mut store = InMemorySessionStore::new(Duration::from_secs(10));
        store.put(1_u32, "old", start);
        store.put(2_u32, "fresh", start + Duration::from_secs(8));

        let later = start + Duration::from_secs(12);
        assert_eq!(store.get(&1, later), None);
        assert_eq!(store.get(&2, later), Some(&"fresh"));
        assert_eq!(store.values(later).count(), 1);

        assert_eq!(store.evict_expired(later), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_restarts_ttl() {
        let start = Instant::now();
        let mut store = InMemorySessionStore::new(Duration::from_secs(5));
        store.put('a', 1, start);
        store.put('a', 1, start + Duration::from_secs(4));

        assert_eq!(store.evict_expired(start + Duration::from_secs(6)), 0);
        assert_eq!(store.get(&'a', start + Duration::from_secs(6)), Some(&1));
    }
}
