//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ns_agent::NurseStore;
use ns_behavior::{CureDelivered, EventSink};
use ns_core::Tick;
use ns_sim::{SimObserver, SimStats};
use ns_world::WorldState;

use crate::row::{DeliveryRow, NurseSnapshotRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes nurse snapshots, population summaries and
/// the delivery log to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EventSink for SimOutputObserver<W> {
    fn cure_delivered(&mut self, delivery: &CureDelivered) {
        let result = self.writer.write_delivery(&DeliveryRow::from(delivery));
        self.store_err(result);
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, now: Tick, nurses: &NurseStore, world: &WorldState) {
        let rows: Vec<NurseSnapshotRow> = nurses
            .agent_ids()
            .map(|agent| NurseSnapshotRow::new(now, &nurses.snapshot(agent)))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let summary = SummaryRow {
            tick:         now.0,
            living:       nurses.living_count() as u64,
            cured_houses: world.cured_count() as u64,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _now: Tick, _stats: &SimStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
