//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `nurse_snapshots.csv`
//! - `deliveries.csv`
//! - `summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, NurseSnapshotRow, OutputResult, SummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    deliveries: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    ///
    /// `dir` is created if it does not exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("nurse_snapshots.csv"))?;
        snapshots.write_record([
            "tick", "nurse_id", "lat", "lon", "alive", "countdown",
            "hot_chocolate", "task", "target_house", "carried_cure",
        ])?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record(["tick", "nurse_id", "house_id", "house", "illness"])?;

        let mut summaries = Writer::from_path(dir.join("summaries.csv"))?;
        summaries.write_record(["tick", "living", "cured_houses"])?;

        Ok(Self {
            snapshots,
            deliveries,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[NurseSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.nurse_id.to_string(),
                row.lat.to_string(),
                row.lon.to_string(),
                (row.alive as u8).to_string(),
                row.countdown.to_string(),
                row.hot_chocolate.to_string(),
                row.task.to_owned(),
                row.target_house.map(|h| h.to_string()).unwrap_or_default(),
                row.carried_cure.unwrap_or_default().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.tick.to_string(),
            row.nurse_id.to_string(),
            row.house_id.to_string(),
            row.house.clone(),
            row.illness.to_owned(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.living.to_string(),
            row.cured_houses.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.deliveries.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
