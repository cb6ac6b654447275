//! Short-TTL cache for entry snapshots
//!
//! The engine itself never caches; this type is offered to callers that
//! front the engine with fetched entry lists and want to drop them after a
//! create/update/delete. Expiry time is injected on every call, so tests
//! control time and no global state exists anywhere.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;

struct Slot<V> {
    value: V,
    expires_at: DateTime<Utc>,
}

/// A key → {value, expiry} cache with caller-injected time
pub struct TtlCache<K, V> {
    ttl: Duration,
    slots: HashMap<K, Slot<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Create a cache whose entries live for `ttl` after insertion
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: HashMap::new(),
        }
    }

    /// Get a live value; expired slots are treated as absent
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        self.slots
            .get(key)
            .filter(|slot| slot.expires_at > now)
            .map(|slot| &slot.value)
    }

    /// Insert a value, stamping its expiry from the injected `now`
    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.slots.insert(
            key,
            Slot {
                value,
                expires_at: now + self.ttl,
            },
        );
    }

    /// Drop one key, e.g. after the underlying entry list changed
    pub fn invalidate(&mut self, key: &K) {
        self.slots.remove(key);
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Remove expired slots; optional housekeeping for long-lived caches
    pub fn evict_expired(&mut self, now: DateTime<Utc>) {
        self.slots.retain(|_, slot| slot.expires_at > now);
    }

    /// Number of stored slots, expired ones included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the cache holds no slots at all
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
