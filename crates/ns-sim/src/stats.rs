//! Run-level counters.

use ns_core::Tick;

/// Summary of a simulation at a point in time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimStats {
    pub now:          Tick,
    pub living:       usize,
    pub deaths:       usize,
    /// Houses whose `cured` flag is set.
    pub cured_houses: usize,
    /// `cureDelivered` events, including late deliveries to cured houses.
    pub deliveries:   usize,
    /// Jobs executed (dead nurses' jobs are dropped, not counted).
    pub jobs_run:     u64,
}
