// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A bounded key/value cache that reclaims slots of a fixed ring in insertion order.

use std::{
    borrow::Borrow,
    fmt::{self, Debug},
    hash::Hash,
};

use ahash::AHashMap;
use ringcache_core::correctness::{check_positive_i64, check_positive_usize};

use crate::{config::RingCacheConfig, error::RingCacheError};

/// Callback invoked with each key/value pair leaving a [`RingCache`].
///
/// The callback runs synchronously, inline with the `add`, `remove` or `purge` call that
/// triggered it, and before that call returns. A panic inside the callback unwinds through
/// the triggering call.
pub type EvictCallback<K, V> = Box<dyn FnMut(&K, &V) + Send>;

#[derive(Debug)]
struct Entry<V> {
    value: V,
    slot: usize,
}

/// A fixed-capacity cache backed by a circular array of key slots.
///
/// Keys are written into the slot under a cursor which advances round-robin, so the slot
/// reclaimed on overflow always belongs to the oldest inserted key. Values live in an
/// `AHashMap` alongside the index of the slot holding their key, making `add`, `get`,
/// `contains` and `remove` O(1). `purge` is O(capacity).
///
/// Re-adding a resident key replaces its value and moves it to the newest position: its
/// previous slot is cleared first, so a key never occupies more than one slot.
///
/// # Thread Safety
///
/// This cache is not thread-safe. If shared across threads, wrap it in an appropriate
/// synchronization primitive such as `Arc<Mutex<RingCache<K, V>>>`.
///
/// The eviction callback cannot re-enter the cache: every mutating method takes
/// `&mut self`, so the callback has no way to reach the same instance.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use ringcache::RingCache;
///
/// let evicted = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&evicted);
///
/// let mut cache = RingCache::with_evict(3, move |k: &&str, v: &u32| {
///     sink.lock().unwrap().push((*k, *v));
/// })
/// .unwrap();
///
/// cache.add("a", 1);
/// cache.add("b", 2);
/// cache.add("c", 3);
/// cache.add("d", 4);
///
/// assert_eq!(*evicted.lock().unwrap(), vec![("a", 1)]);
/// assert_eq!(cache.len(), 3);
/// ```
///
/// Zero capacity is rejected:
///
/// ```
/// use ringcache::{RingCache, RingCacheError};
///
/// let result = RingCache::<u32, u32>::new(0);
/// assert_eq!(result.unwrap_err(), RingCacheError::InvalidCapacity { capacity: 0 });
/// ```
pub struct RingCache<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    capacity: usize,
    next: usize,
    slots: Box<[Option<K>]>,
    entries: AHashMap<K, Entry<V>>,
    on_evict: Option<EvictCallback<K, V>>,
    log_evictions: bool,
}

impl<K, V> RingCache<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    /// Creates a new empty [`RingCache`] with the given `capacity` and no eviction callback.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, RingCacheError> {
        Self::new_inner(capacity, None, false)
    }

    /// Creates a new empty [`RingCache`] which reports every departing entry to `on_evict`.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_evict<F>(capacity: usize, on_evict: F) -> Result<Self, RingCacheError>
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        Self::new_inner(capacity, Some(Box::new(on_evict)), false)
    }

    /// Creates a new empty [`RingCache`] from the given `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] if the configured capacity is zero or
    /// negative.
    pub fn from_config(config: &RingCacheConfig) -> Result<Self, RingCacheError> {
        let capacity = checked_capacity(config.capacity)?;
        Self::new_inner(capacity, None, config.log_evictions)
    }

    /// Creates a new empty [`RingCache`] from the given `config` which reports every
    /// departing entry to `on_evict`.
    ///
    /// # Errors
    ///
    /// Returns [`RingCacheError::InvalidCapacity`] if the configured capacity is zero or
    /// negative.
    pub fn with_config<F>(config: &RingCacheConfig, on_evict: F) -> Result<Self, RingCacheError>
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        let capacity = checked_capacity(config.capacity)?;
        Self::new_inner(capacity, Some(Box::new(on_evict)), config.log_evictions)
    }

    fn new_inner(
        capacity: usize,
        on_evict: Option<EvictCallback<K, V>>,
        log_evictions: bool,
    ) -> Result<Self, RingCacheError> {
        check_positive_usize(capacity, stringify!(capacity)).map_err(|_| {
            RingCacheError::InvalidCapacity {
                capacity: i64::try_from(capacity).unwrap_or(i64::MAX),
            }
        })?;

        log::debug!("Creating RingCache with capacity {capacity}");

        Ok(Self {
            capacity,
            next: 0,
            slots: empty_slots(capacity),
            entries: AHashMap::with_capacity(capacity),
            on_evict,
            log_evictions,
        })
    }

    /// Returns the fixed capacity of the cache.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries in the cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the cache contains the given key, without affecting eviction order.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns a reference to the value for the given key, without affecting eviction order.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Adds a key/value pair at the cursor and advances it.
    ///
    /// If the slot under the cursor holds a key, that entry is evicted first (reported to
    /// the callback) and `true` is returned. If `key` is already resident its old slot is
    /// cleared and its value replaced without invoking the callback.
    pub fn add(&mut self, key: K, value: V) -> bool {
        if let Some(entry) = self.entries.get(&key) {
            self.slots[entry.slot] = None;
        }

        let evicted = match self.slots[self.next].take() {
            Some(old_key) => {
                self.evict(&old_key);
                true
            }
            None => false,
        };

        self.entries.insert(
            key.clone(),
            Entry {
                value,
                slot: self.next,
            },
        );
        self.slots[self.next] = Some(key);
        self.next = (self.next + 1) % self.capacity;

        evicted
    }

    /// Adds a key/value pair where either side may be absent.
    ///
    /// If either `key` or `value` is `None` this is a no-op returning `false`, otherwise it
    /// behaves exactly like [`RingCache::add`].
    pub fn add_optional(&mut self, key: Option<K>, value: Option<V>) -> bool {
        match (key, value) {
            (Some(key), Some(value)) => self.add(key, value),
            (key, _) => {
                log::trace!("Ignoring add with absent key or value, key={key:?}");
                false
            }
        }
    }

    /// Removes the given key from the cache, returning whether it was resident.
    ///
    /// The freed slot is not reused until the cursor next reaches it.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some((key, entry)) = self.entries.remove_entry(key) else {
            return false;
        };

        self.slots[entry.slot] = None;
        self.notify(&key, &entry.value);
        true
    }

    /// Evicts every entry, oldest first, and resets the cursor to the start of the ring.
    pub fn purge(&mut self) {
        let purged = self.entries.len();
        let (newer, older) = self.slots.split_at_mut(self.next);

        for slot in older.iter_mut().chain(newer.iter_mut()) {
            let Some(key) = slot.take() else {
                continue;
            };
            if let Some(entry) = self.entries.remove(&key) {
                if self.log_evictions {
                    log::trace!("Evicted {key:?}");
                }
                if let Some(on_evict) = self.on_evict.as_mut() {
                    on_evict(&key, &entry.value);
                }
            }
        }

        self.entries.clear();
        self.next = 0;

        log::debug!("Purged {purged} entries");
    }

    /// Returns an iterator over the resident keys, oldest first.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.ring_order().filter_map(|slot| self.slots[slot].as_ref())
    }

    /// Returns an iterator over the resident key/value pairs, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys()
            .filter_map(|key| self.entries.get(key).map(|entry| (key, &entry.value)))
    }

    /// Returns the entry the cursor will reclaim next, if any.
    #[must_use]
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.iter().next()
    }

    /// Verifies that the slot ring and the value mapping agree.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistency found.
    pub fn check_invariants(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.next < self.capacity,
            "cursor {} out of range for capacity {}",
            self.next,
            self.capacity
        );
        anyhow::ensure!(
            self.slots.len() == self.capacity,
            "ring length {} != capacity {}",
            self.slots.len(),
            self.capacity
        );

        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        anyhow::ensure!(
            occupied == self.entries.len(),
            "{occupied} occupied slots but {} entries",
            self.entries.len()
        );

        for (key, entry) in &self.entries {
            anyhow::ensure!(
                self.slots.get(entry.slot).and_then(Option::as_ref) == Some(key),
                "entry {key:?} not found at slot {}",
                entry.slot
            );
        }

        Ok(())
    }

    fn ring_order(&self) -> impl Iterator<Item = usize> {
        let (next, capacity) = (self.next, self.capacity);
        (0..capacity).map(move |offset| (next + offset) % capacity)
    }

    fn evict(&mut self, key: &K) {
        if let Some(entry) = self.entries.remove(key) {
            self.notify(key, &entry.value);
        }
    }

    fn notify(&mut self, key: &K, value: &V) {
        if self.log_evictions {
            log::trace!("Evicted {key:?}");
        }
        if let Some(on_evict) = self.on_evict.as_mut() {
            on_evict(key, value);
        }
    }
}

impl<K, V> Debug for RingCache<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

fn checked_capacity(capacity: i64) -> Result<usize, RingCacheError> {
    check_positive_i64(capacity, stringify!(capacity))
        .ok()
        .and_then(|()| usize::try_from(capacity).ok())
        .ok_or(RingCacheError::InvalidCapacity { capacity })
}

fn empty_slots<K>(capacity: usize) -> Box<[Option<K>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
