//! Copy and filter workloads over an integer-keyed table.
//!
//! Each workload builds a fresh table, runs a single traversal-and-reinsert
//! pass, and fatally asserts the resulting element count. The interesting
//! cost lives in the destination table rehashing while the source is walked
//! in hash order; [`crate::sweep`] supplies the size schedule that exposes
//! it.

use crate::table::Table;

/// Builds a table holding `key -> 2 * key` for every `key` in `1..=size`.
///
/// The table is constructed with a capacity hint of `size`, so population
/// itself does not rehash and the later copy or filter pass is the only
/// resize-sensitive step.
///
/// # Panics
///
/// Panics if `size` is zero, or if the populated table's element count does
/// not equal `size`.
pub fn populate<T: Table>(size: usize) -> T {
    assert!(size >= 1, "workload size must be at least 1");

    let mut table = T::with_capacity(size);
    for key in 1..=size as u64 {
        table.insert(key, 2 * key);
    }
    check_count(table.len(), size);
    table
}

/// Copies every entry of `source` into a fresh, unsized table.
///
/// The destination starts empty with no capacity hint, and entries are
/// inserted one at a time in the source's iteration order. The naive
/// iterate-and-insert loop is the point: a bulk path would hide the
/// destination's incremental rehash cost.
pub fn copy<T: Table>(source: &T) -> T {
    let mut dest = T::with_capacity(0);
    for (key, value) in source.entries() {
        dest.insert(key, value);
    }
    dest
}

/// Builds a fresh table containing exactly the entries of `source` for which
/// `predicate` returns `true`, pairs unchanged.
pub fn filter<T: Table>(source: &T, mut predicate: impl FnMut(u64, u64) -> bool) -> T {
    let mut dest = T::with_capacity(0);
    for (key, value) in source.entries() {
        if predicate(key, value) {
            dest.insert(key, value);
        }
    }
    dest
}

/// Populates a table of `size` entries and copies it, checking both element
/// counts.
///
/// # Panics
///
/// Panics if either count check fails; a mismatch is fatal and the sweep is
/// expected to be reported as a failed run by whatever harness drives it.
pub fn copy_workload<T: Table>(size: usize) {
    let source = populate::<T>(size);
    let dest = copy(&source);
    check_count(dest.len(), size);
}

/// Populates a table of `size` entries and filters it with a constant-true
/// predicate, checking both element counts.
///
/// Retaining everything makes this the same full-traversal reinsertion loop
/// as [`copy_workload`], reached through the filter entry point, so a
/// regression specific to that path still shows up.
///
/// # Panics
///
/// Panics if either count check fails.
pub fn filter_workload<T: Table>(size: usize) {
    let source = populate::<T>(size);
    let dest = filter(&source, |_, _| true);
    check_count(dest.len(), size);
}

#[track_caller]
fn check_count(actual: usize, expected: usize) {
    assert!(
        actual == expected,
        "element count mismatch: got {actual}, expected {expected}"
    );
}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use siphasher::sip::SipHasher;

    use super::*;

    #[derive(Clone, Default)]
    struct SipHashBuilder;

    impl BuildHasher for SipHashBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new()
        }
    }

    type SipTable = hashbrown::HashMap<u64, u64, SipHashBuilder>;

    #[test]
    fn test_populate_exact_contents() {
        let table: SipTable = populate(5);
        assert_eq!(table.len(), 5);
        for key in 1..=5 {
            assert_eq!(table.get(&key), Some(&(2 * key)));
        }
        assert_eq!(table.get(&0), None);
        assert_eq!(table.get(&6), None);
    }

    #[test]
    fn test_populate_keys_have_no_gaps() {
        let size = 10_000;
        let table: SipTable = populate(size);
        assert_eq!(table.len(), size);
        // len == size plus every key in 1..=size present rules out both
        // duplicates and gaps.
        for key in 1..=size as u64 {
            assert_eq!(table.get(&key), Some(&(2 * key)));
        }
    }

    #[test]
    #[should_panic(expected = "workload size must be at least 1")]
    fn test_populate_rejects_zero() {
        let _: SipTable = populate(0);
    }

    #[test]
    fn test_copy_small_exact() {
        let source: SipTable = populate(5);
        let dest = copy(&source);

        assert_eq!(dest.len(), 5);
        for (key, value) in [(1, 2), (2, 4), (3, 6), (4, 8), (5, 10)] {
            assert_eq!(dest.get(&key), Some(&value));
        }
        // Source is intact after the copy.
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_filter_retains_matching_entries() {
        let source: SipTable = populate(5);
        let dest = filter(&source, |_, value| value > 6);

        assert_eq!(dest.len(), 2);
        assert_eq!(dest.get(&4), Some(&8));
        assert_eq!(dest.get(&5), Some(&10));
        assert_eq!(dest.get(&3), None);
    }

    #[test]
    fn test_filter_constant_true_matches_copy() {
        let source: SipTable = populate(1_000);
        let copied = copy(&source);
        let filtered = filter(&source, |_, _| true);

        assert_eq!(copied.len(), source.len());
        assert_eq!(filtered.len(), source.len());
        for key in 1..=1_000 {
            assert_eq!(copied.get(&key), filtered.get(&key));
        }
    }

    #[test]
    fn test_filter_constant_false_is_empty() {
        let source: SipTable = populate(100);
        let dest = filter(&source, |_, _| false);
        assert!(dest.is_empty());
    }

    #[test]
    fn test_copy_workload_checks_pass() {
        copy_workload::<SipTable>(1);
        copy_workload::<SipTable>(4_096);
    }

    #[test]
    fn test_filter_workload_checks_pass() {
        filter_workload::<SipTable>(1);
        filter_workload::<SipTable>(4_096);
    }

    #[cfg(all(feature = "std", feature = "foldhash"))]
    #[test]
    fn test_workloads_over_std_table() {
        copy_workload::<crate::table::StdTable>(1_000);
        filter_workload::<crate::table::StdTable>(1_000);
    }
}
