//! Simulation observer trait for data collection and live fan-out.

use ns_agent::NurseStore;
use ns_behavior::EventSink;
use ns_core::Tick;
use ns_world::WorldState;

use crate::SimStats;

/// Callbacks invoked by [`Sim`][crate::Sim] while it runs.
///
/// Every observer is also an [`EventSink`], so it receives each
/// `locationUpdate` and `cureDelivered` as it happens.  All methods have
/// default no-op implementations so implementors only need to override what
/// they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl EventSink for Deliveries {
///     fn cure_delivered(&mut self, _: &CureDelivered) { self.0 += 1; }
/// }
/// impl SimObserver for Deliveries {}
/// ```
pub trait SimObserver: EventSink {
    /// Called every `config.snapshot_interval_ms` of simulated time.
    ///
    /// Provides read-only access to the full nurse and world state so output
    /// writers can record a snapshot without the sim knowing about any
    /// specific output format.
    fn on_snapshot(&mut self, _now: Tick, _nurses: &NurseStore, _world: &WorldState) {}

    /// Called once when [`Sim::run`][crate::Sim::run] reaches the end tick.
    fn on_sim_end(&mut self, _now: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl EventSink for NoopObserver {}

impl SimObserver for NoopObserver {}
