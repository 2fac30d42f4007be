use core::hash::BuildHasher;

/// The default hash builder used by the table aliases and the harness entry
/// points.
#[cfg(feature = "foldhash")]
pub type DefaultHashBuilder = foldhash::fast::RandomState;

/// `std`'s `HashMap` over the default hash builder.
#[cfg(all(feature = "std", feature = "foldhash"))]
pub type StdTable = std::collections::HashMap<u64, u64, DefaultHashBuilder>;

/// `hashbrown`'s `HashMap` over the default hash builder.
#[cfg(feature = "foldhash")]
pub type HashbrownTable = hashbrown::HashMap<u64, u64, DefaultHashBuilder>;

/// An integer-keyed, integer-valued associative container.
///
/// This is the seam the workloads run against: any hash map that can be
/// pre-sized, inserted into one entry at a time, and iterated in its native
/// hash order can be swept. Implementations are provided for
/// `std::collections::HashMap` (with the `std` feature) and
/// `hashbrown::HashMap`, both generic over the hash builder.
pub trait Table {
    /// Creates an empty table pre-sized to hold `capacity` entries without
    /// rehashing.
    ///
    /// The actual capacity may be larger than requested due to the bucket
    /// organization of the underlying map.
    fn with_capacity(capacity: usize) -> Self;

    /// Inserts `key -> value`, replacing any existing value for `key`.
    fn insert(&mut self, key: u64, value: u64);

    /// Returns the value stored for `key`, if any.
    fn get(&self, key: u64) -> Option<u64>;

    /// Returns the number of entries in the table.
    fn len(&self) -> usize;

    /// Returns `true` if the table holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the entries in the table's native hash-iteration order.
    ///
    /// The order is whatever the underlying map yields for a single pass. It
    /// is stable within that pass and carries no relation to key order or to
    /// the order of any other table, including one holding the same entries
    /// at a different capacity.
    fn entries(&self) -> impl Iterator<Item = (u64, u64)>;
}

#[cfg(feature = "std")]
impl<S> Table for std::collections::HashMap<u64, u64, S>
where
    S: BuildHasher + Default,
{
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    fn insert(&mut self, key: u64, value: u64) {
        std::collections::HashMap::insert(self, key, value);
    }

    fn get(&self, key: u64) -> Option<u64> {
        std::collections::HashMap::get(self, &key).copied()
    }

    fn len(&self) -> usize {
        std::collections::HashMap::len(self)
    }

    fn entries(&self) -> impl Iterator<Item = (u64, u64)> {
        self.iter().map(|(&key, &value)| (key, value))
    }
}

impl<S> Table for hashbrown::HashMap<u64, u64, S>
where
    S: BuildHasher + Default,
{
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, S::default())
    }

    fn insert(&mut self, key: u64, value: u64) {
        hashbrown::HashMap::insert(self, key, value);
    }

    fn get(&self, key: u64) -> Option<u64> {
        hashbrown::HashMap::get(self, &key).copied()
    }

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn entries(&self) -> impl Iterator<Item = (u64, u64)> {
        self.iter().map(|(&key, &value)| (key, value))
    }
}
