//! Sweep driver, size schedule, and harness-facing metadata.

use alloc::vec::Vec;

use crate::table::Table;
use crate::workload;

/// The default workload sizes, in execution order.
///
/// Successive fourth-root-of-2 multiples of the base size: a logarithmic
/// spread between 1.0x and ~1.68x, none of which is itself a power of two.
/// Quadratic copy behavior only appears at certain load factors, and a
/// power-of-two-bucketed table crosses its doubling thresholds at different
/// points of this spread for the source and destination tables.
pub const DEFAULT_SIZES: [usize; 4] = [100_000, 118_920, 141_421, 168_179];

/// The size schedule for one sweep.
///
/// The default schedule is tuned to a power-of-two bucket-doubling growth
/// policy. A container that grows differently may need a recalibrated
/// sequence to cross the analogous thresholds, so the sizes are configurable
/// rather than fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
    sizes: Vec<usize>,
}

impl SweepConfig {
    /// Creates a schedule running the given sizes in order.
    pub fn new(sizes: Vec<usize>) -> Self {
        Self { sizes }
    }

    /// The sizes the sweep will run, in execution order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZES.to_vec())
    }
}

/// Runs the copy workload once per configured size, in order.
///
/// Each size is an independent pass: its tables are built, consumed, and
/// dropped within the pass, so repeated sweeps behave identically.
///
/// # Panics
///
/// Panics on the first element-count mismatch; see
/// [`workload::copy_workload`].
pub fn copy_sweep<T: Table>(config: &SweepConfig) {
    for &size in config.sizes() {
        workload::copy_workload::<T>(size);
    }
}

/// Runs the filter workload (constant-true predicate) once per configured
/// size, in order.
///
/// # Panics
///
/// Panics on the first element-count mismatch; see
/// [`workload::filter_workload`].
pub fn filter_sweep<T: Table>(config: &SweepConfig) {
    for &size in config.sizes() {
        workload::filter_workload::<T>(size);
    }
}

/// Harness entry point: the default copy sweep over [`crate::table::StdTable`].
///
/// `_n` is the iteration count the harness passes to every registered
/// workload; the size schedule is fixed here, so it is ignored.
#[cfg(all(feature = "std", feature = "foldhash"))]
pub fn run_copy_sweep(_n: u64) {
    copy_sweep::<crate::table::StdTable>(&SweepConfig::default());
}

/// Harness entry point: the default filter sweep over
/// [`crate::table::StdTable`].
///
/// The iteration count is accepted and ignored, as in [`run_copy_sweep`].
#[cfg(all(feature = "std", feature = "foldhash"))]
pub fn run_filter_sweep(_n: u64) {
    filter_sweep::<crate::table::StdTable>(&SweepConfig::default());
}

/// Descriptive metadata for one workload, for harness-side registration.
///
/// The name and tags exist for filtering and reporting by an external
/// harness; they have no behavioral effect.
pub struct WorkloadInfo {
    /// Harness-facing workload name.
    pub name: &'static str,
    /// Classification tags for filtering and reporting.
    pub tags: &'static [&'static str],
    /// The workload entry point, taking the harness iteration count.
    pub run: fn(u64),
}

/// The workloads this crate exposes to a benchmark harness.
#[cfg(all(feature = "std", feature = "foldhash"))]
pub const WORKLOADS: &[WorkloadInfo] = &[
    WorkloadInfo {
        name: "MapCopy",
        tags: &["validation", "api", "map"],
        run: run_copy_sweep,
    },
    WorkloadInfo {
        name: "MapFilter",
        tags: &["validation", "api", "map"],
        run: run_filter_sweep,
    },
];
