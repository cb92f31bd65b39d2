//! Separate-chaining hash table keyed by a caller-supplied hash function.
//!
//! Entries live in buckets selected by `hash(key) % capacity`; colliding keys
//! share a bucket and are kept in insertion order. The table grows before an
//! insertion would push the load factor above one half, so a bucket scan stays
//! short on average. Rehashing builds a fresh bucket vector and swaps it in.

mod builder;

use std::{fmt, mem};

use tracing::debug;

use crate::error::HashTableError;

pub use self::builder::HashTableBuilder;

/// Number of buckets allocated by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Hash function type used when a table does not name its own hasher type.
pub type HashFn<K> = fn(&K) -> u64;

/// Hashes an integer key to itself.
///
/// This is the hasher used for vertex and element identifiers throughout the
/// crate.
///
/// # Examples
/// ```
/// use plinth_core::identity_hash;
///
/// assert_eq!(identity_hash(&7), 7);
/// ```
#[must_use]
pub fn identity_hash(key: &usize) -> u64 {
    *key as u64
}

/// A map from `K` to `V` using separate chaining and a fixed hash function.
///
/// The hash function is bound for the lifetime of the table and is re-invoked
/// on every key during a resize, so it must be deterministic.
///
/// # Examples
/// ```
/// use plinth_core::HashTable;
///
/// let mut table = HashTable::new(|key: &u64| *key);
/// assert_eq!(table.set(1, "one"), None);
/// assert_eq!(table.set(1, "uno"), Some("one"));
/// assert_eq!(table.get(&1), Some(&"uno"));
/// assert_eq!(table.get(&2), None);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, H = HashFn<K>> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: H,
}

impl<K, V, H> HashTable<K, V, H> {
    /// Returns the number of entries.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` when the table holds no entries.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the current number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates over all entries, bucket by bucket and in insertion order
    /// within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .iter()
            .flatten()
            .map(|(key, value)| (key, value))
    }

    /// Iterates over all keys in the same order as [`Self::iter`].
    ///
    /// The order depends on the hash function and the capacity history; do
    /// not rely on it.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.buckets.iter().flatten().map(|(key, _)| key)
    }
}

impl<K, V, H> HashTable<K, V, H>
where
    K: Eq,
    H: Fn(&K) -> u64,
{
    /// Creates an empty table with [`DEFAULT_CAPACITY`] buckets.
    #[must_use]
    pub fn new(hasher: H) -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            hasher,
        }
    }

    /// Creates an empty table with `capacity` buckets.
    ///
    /// # Errors
    /// Returns [`HashTableError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_capacity(hasher: H, capacity: usize) -> Result<Self, HashTableError> {
        if capacity == 0 {
            return Err(HashTableError::InvalidCapacity { capacity });
        }
        Ok(Self {
            buckets: empty_buckets(capacity),
            len: 0,
            hasher,
        })
    }

    /// Returns the value mapped to `key`, or `None` when the key is absent.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value mapped to `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Maps `key` to `value`, returning the previous value if the key existed.
    ///
    /// Inserting a new key first doubles the capacity when the table would
    /// otherwise exceed a load factor of one half.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(mem::replace(slot, value));
        }

        if self.len.saturating_add(1).saturating_mul(2) > self.buckets.len() {
            self.double_capacity();
        }

        let index = self.bucket_index(&key);
        self.buckets[index].push((key, value));
        self.len = self.len.saturating_add(1);
        None
    }

    /// Removes `key` and returns the value it mapped to.
    ///
    /// # Errors
    /// Returns [`HashTableError::KeyNotFound`] when the key is absent.
    pub fn delete(&mut self, key: &K) -> Result<V, HashTableError> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket
            .iter()
            .position(|(candidate, _)| candidate == key)
            .ok_or(HashTableError::KeyNotFound)?;
        let (_, value) = bucket.remove(position);
        self.len = self.len.saturating_sub(1);
        Ok(value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        let capacity = self.buckets.len() as u64;
        // The remainder is below the bucket count, so it fits in usize.
        ((self.hasher)(key) % capacity) as usize
    }

    fn double_capacity(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity.saturating_mul(2);
        let previous = mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for (key, value) in previous.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }

        debug!(
            old_capacity,
            new_capacity,
            entries = self.len,
            "hash table capacity doubled"
        );
    }
}

impl<K, V, H> fmt::Debug for HashTable<K, V, H>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Vec<(K, V)>> {
    (0..capacity).map(|_| Vec::new()).collect()
}
