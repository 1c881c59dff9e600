//! `ns-output` — CSV output for the nurse patrol simulation.
//!
//! | File                   | Written on                                  |
//! |------------------------|---------------------------------------------|
//! | `nurse_snapshots.csv`  | every snapshot, one row per nurse           |
//! | `summaries.csv`        | every snapshot, living / cured totals       |
//! | `deliveries.csv`       | every `cureDelivered` event                 |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `ns_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ns_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, NurseSnapshotRow, SummaryRow};
pub use writer::OutputWriter;
