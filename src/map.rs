//! # Fixed-Size Separate-Chaining Hash Map
//!
//! This module implements a **HashMap** using **separate chaining** over a bucket table whose
//! length is **fixed at construction**. It supports:
//! - **Generic** key-value pairs (`K: Hash + Eq, V`).
//! - **Configurable** table size (default 11, a prime) chosen once and kept for the map's lifetime.
//! - **Configurable** hasher using `BuildHasher` traits, defaulting to `RandomState`.
//! - **Insert** (overwrite-on-duplicate-key), **get**, **remove**, **iter**, bulk **extend**,
//!   detached snapshot views, and content-based equality.
//!
//! There is no load-factor tracking and no rehashing: a key's bucket is decided once by
//! floor-mod reduction of its hash code and stays valid until the entry is removed. Chains
//! simply grow as collisions accumulate, so lookups degrade to O(n / table_size) on average
//! rather than forcing a resize.
//!
//! This map is **not** thread-safe; wrap it in a mutex for shared use.

use std::collections::hash_map::RandomState;
use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::error::{MapError, Result};

/// Default number of buckets if none specified. Prime, so keys with poorly
/// distributed hash codes still spread across the table.
pub const DEFAULT_TABLE_SIZE: usize = 11;

/// A single entry in a chain: `(K, V)`.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A "bucket" is a vector of entries for separate chaining.
type Bucket<K, V> = Vec<Entry<K, V>>;

/// A separate-chaining hash map with a fixed bucket table and a customizable hasher.
///
/// Every bucket exists from construction onward, so every operation reduces to:
/// compute the key's bucket index, then scan or mutate that one chain.
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = RandomState> {
    table: Vec<Bucket<K, V>>,
    /// The number of stored key-value pairs.
    len: usize,
    /// Hasher builder.
    build_hasher: S,
}

/// A builder for the `ChainedHashMap`.
/// Typically you'll call `.with_table_size(...)`, `.with_hasher(...)`, then `.build()`.
#[derive(Debug)]
pub struct ChainedHashMapBuilder<S = RandomState> {
    table_size: usize,
    hasher: S,
}

impl Default for ChainedHashMapBuilder<RandomState> {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            hasher: RandomState::new(),
        }
    }
}

impl ChainedHashMapBuilder<RandomState> {
    /// Creates a new builder with the default table size and default hasher (RandomState).
    pub fn new() -> Self {
        Default::default()
    }
}

impl<S: BuildHasher> ChainedHashMapBuilder<S> {
    /// Sets the number of buckets. The table keeps exactly this many buckets forever;
    /// a zero size is rejected by [`build`](Self::build).
    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Sets a custom hasher builder.
    pub fn with_hasher<T: BuildHasher>(self, hasher: T) -> ChainedHashMapBuilder<T> {
        ChainedHashMapBuilder {
            table_size: self.table_size,
            hasher,
        }
    }

    /// Build the final `ChainedHashMap`, creating an empty chain at every bucket.
    ///
    /// Fails with [`MapError::InvalidTableSize`] if the table size is zero, since the
    /// index reduction is a remainder by the table length.
    pub fn build<K: Hash + Eq, V>(self) -> Result<ChainedHashMap<K, V, S>> {
        if self.table_size == 0 {
            return Err(MapError::InvalidTableSize(self.table_size));
        }
        let mut table = Vec::with_capacity(self.table_size);
        table.resize_with(self.table_size, Bucket::default);

        Ok(ChainedHashMap {
            table,
            len: 0,
            build_hasher: self.hasher,
        })
    }
}

impl<K: Hash + Eq, V> ChainedHashMap<K, V> {
    /// Creates a new map with the default table size and default hasher.
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(DEFAULT_TABLE_SIZE);
        table.resize_with(DEFAULT_TABLE_SIZE, Bucket::default);

        ChainedHashMap {
            table,
            len: 0,
            build_hasher: RandomState::new(),
        }
    }

    /// Creates a new map with the specified number of buckets and default hasher.
    ///
    /// Fails with [`MapError::InvalidTableSize`] if `table_size` is zero.
    pub fn with_table_size(table_size: usize) -> Result<Self> {
        ChainedHashMapBuilder::new().with_table_size(table_size).build()
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedHashMap<K, V, S> {
    /// Returns the number of key-value pairs in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed number of buckets in the table.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the map contains an entry for the given key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if at least one entry holds a value equal to `value`.
    /// Unlike key lookups this cannot be routed to a single bucket, so it scans
    /// every chain: O(len).
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.table
            .iter()
            .flatten()
            .any(|entry| entry.value == *value)
    }

    /// Inserts a key-value pair into the map.
    /// If the key already exists, its value is replaced in place and the old value returned;
    /// otherwise the entry is appended to its chain and `None` is returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket_index = self.bucket_index(&key);
        let bucket = &mut self.table[bucket_index];

        // Check if key exists
        for entry in bucket.iter_mut() {
            if entry.key == key {
                let oldv = std::mem::replace(&mut entry.value, value);
                return Some(oldv);
            }
        }
        // Append to the chain's end
        bucket.push(Entry { key, value });
        self.len += 1;
        None
    }

    /// Returns a reference to the value corresponding to the key, if present.
    ///
    /// `None` always means "key absent": a stored value is returned by reference,
    /// so there is no sentinel value to confuse it with.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index(key);
        for entry in &self.table[idx] {
            if &entry.key == key {
                return Some(&entry.value);
            }
        }
        None
    }

    /// Returns a mutable reference to the value corresponding to the key, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        for entry in &mut self.table[idx] {
            if &entry.key == key {
                return Some(&mut entry.value);
            }
        }
        None
    }

    /// Removes and returns the value for the specified key, if present.
    ///
    /// The chain scan stops at the first match and removes by index, so no element
    /// is skipped or revisited.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index(key);
        let bucket = &mut self.table[idx];
        let mut i = 0;
        while i < bucket.len() {
            if &bucket[i].key == key {
                let entry = bucket.swap_remove(i);
                self.len -= 1;
                return Some(entry.value);
            }
            i += 1;
        }
        None
    }

    /// Clears the map, removing all key-value pairs.
    ///
    /// Every bucket is emptied in place; the table itself is untouched, so the
    /// bucket count stays fixed and the map remains usable.
    pub fn clear(&mut self) {
        for bucket in &mut self.table {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over the key-value pairs in the map.
    /// Iteration order follows bucket order and is not meaningful.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.table
            .iter()
            .flat_map(|bucket| bucket.iter().map(|entry| (&entry.key, &entry.value)))
    }

    /// Returns an iterator over the keys in the map.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the values in the map.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Returns a fresh owned set of the distinct keys currently in the map.
    ///
    /// The set is a snapshot, not a view: mutating the map afterwards does not
    /// change a previously returned set, and mutating the set never touches the map.
    pub fn key_set(&self) -> HashSet<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    /// Returns a fresh owned list of every value currently in the map, duplicates
    /// included. A snapshot, not a view.
    pub fn value_list(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    /// Returns a fresh owned snapshot of every entry currently in the map.
    /// Keys are pairwise distinct by the map's overwrite-on-insert contract.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Internal function computing the bucket index for a given key.
    ///
    /// The hash code is reinterpreted as a signed integer and reduced with a
    /// Euclidean (floor-mod) remainder, so a negative code still yields an index
    /// in `0..table_size` instead of an out-of-range one.
    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = self.build_hasher.build_hasher();
        key.hash(&mut hasher);
        let code = hasher.finish() as i64;
        code.rem_euclid(self.table.len() as i64) as usize
    }
}

/// Bulk insertion: each pair follows the same overwrite contract as [`ChainedHashMap::insert`].
impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for ChainedHashMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::new();
        map.extend(iter);
        map
    }
}

/// Content equality: two maps are equal iff they hold the same entries, regardless
/// of insertion order or bucket placement.
impl<K: Hash + Eq, V: PartialEq, S: BuildHasher> PartialEq for ChainedHashMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for ChainedHashMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for ChainedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.table
                    .iter()
                    .flatten()
                    .map(|entry| (&entry.key, &entry.value)),
            )
            .finish()
    }
}
