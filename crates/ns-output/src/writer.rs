//! The `OutputWriter` trait implemented by backend writers.

use crate::{DeliveryRow, NurseSnapshotRow, OutputResult, SummaryRow};

/// Sink for tabular simulation output.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of nurse snapshots.
    fn write_snapshots(&mut self, rows: &[NurseSnapshotRow]) -> OutputResult<()>;

    /// Append one row to the delivery log.
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()>;

    /// Write one population summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
