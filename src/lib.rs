#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The sweep driver and harness-facing metadata.
///
/// This module provides the size schedule, the `SweepConfig` that makes it
/// tunable, and the entry points a benchmark harness registers.
pub mod sweep;

pub mod table;

/// The copy and filter workloads themselves.
///
/// This module provides `populate`, `copy`, and `filter` over any [`Table`],
/// plus the checked per-size workload runs the sweeps are built from.
pub mod workload;

pub use sweep::SweepConfig;
pub use sweep::WorkloadInfo;
pub use table::Table;
