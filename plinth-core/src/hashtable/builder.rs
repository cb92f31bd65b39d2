//! Builder for configuring [`HashTable`] construction.

use crate::error::HashTableError;

use super::{DEFAULT_CAPACITY, HashTable};

/// Configures and constructs [`HashTable`] instances.
///
/// # Examples
/// ```
/// use plinth_core::{HashTableBuilder, identity_hash};
///
/// let table = HashTableBuilder::new()
///     .with_initial_capacity(16)
///     .build::<usize, &str, _>(identity_hash)
///     .expect("builder configuration is valid");
/// assert_eq!(table.capacity(), 16);
/// assert!(table.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashTableBuilder {
    initial_capacity: usize,
}

impl Default for HashTableBuilder {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl HashTableBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use plinth_core::HashTableBuilder;
    ///
    /// assert_eq!(HashTableBuilder::new().initial_capacity(), 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of buckets allocated up front.
    #[must_use]
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Returns the configured initial capacity.
    #[must_use]
    #[rustfmt::skip]
    pub const fn initial_capacity(&self) -> usize { self.initial_capacity }

    /// Validates the configuration and constructs an empty table bound to
    /// `hasher`.
    ///
    /// # Errors
    /// Returns [`HashTableError::InvalidCapacity`] when the configured
    /// capacity is zero.
    ///
    /// # Examples
    /// ```
    /// use plinth_core::{HashTableBuilder, HashTableError};
    ///
    /// let err = HashTableBuilder::new()
    ///     .with_initial_capacity(0)
    ///     .build::<u64, u64, _>(|key: &u64| *key)
    ///     .expect_err("zero capacity must be rejected");
    /// assert_eq!(err, HashTableError::InvalidCapacity { capacity: 0 });
    /// ```
    pub fn build<K, V, H>(self, hasher: H) -> Result<HashTable<K, V, H>, HashTableError>
    where
        K: Eq,
        H: Fn(&K) -> u64,
    {
        HashTable::with_capacity(hasher, self.initial_capacity)
    }
}
