//! Integration tests for ns-output.

#[cfg(test)]
mod row_tests {
    use ns_agent::{NurseSnapshot, Task};
    use ns_behavior::CureDelivered;
    use ns_core::{AgentId, Cure, HouseId, Illness, Position, Tick};
    use ns_world::House;

    use crate::row::{DeliveryRow, NurseSnapshotRow};

    #[test]
    fn snapshot_row_flattens_task() {
        let snap = NurseSnapshot {
            agent:         AgentId(4),
            position:      Position::new(65.5, -101.25),
            alive:         true,
            countdown:     12,
            hot_chocolate: 3,
            task:          Task::Delivering { house: HouseId(9), cure: Cure::Furnace },
        };
        let row = NurseSnapshotRow::new(Tick(2_000), &snap);
        assert_eq!(row.tick, 2_000);
        assert_eq!(row.nurse_id, 4);
        assert_eq!(row.task, "delivering");
        assert_eq!(row.target_house, Some(9));
        assert_eq!(row.carried_cure, Some("A furnace"));

        let patrol = NurseSnapshotRow::new(Tick(0), &NurseSnapshot { task: Task::Patrol, ..snap });
        assert_eq!(patrol.target_house, None);
        assert_eq!(patrol.carried_cure, None);
    }

    #[test]
    fn delivery_row_from_event() {
        let house = House::new(HouseId(2), Position::new(61.0, -120.0), Some(Illness::IglooFever));
        let event = CureDelivered { agent_id: AgentId(1), house, at: Tick(7_340) };
        let row = DeliveryRow::from(&event);
        assert_eq!(row.tick, 7_340);
        assert_eq!(row.nurse_id, 1);
        assert_eq!(row.house_id, 2);
        assert_eq!(row.house, "House 2");
        assert_eq!(row.illness, Illness::IglooFever.as_str());
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DeliveryRow, NurseSnapshotRow, SummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    fn snap_row(nurse_id: u32, tick: u64) -> NurseSnapshotRow {
        NurseSnapshotRow {
            tick,
            nurse_id,
            lat:           65.0,
            lon:           -100.0,
            alive:         true,
            countdown:     40,
            hot_chocolate: 2,
            task:          "patrol",
            target_house:  None,
            carried_cure:  None,
        }
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested").join("out");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("nurse_snapshots.csv").exists());
        assert!(out.join("deliveries.csv").exists());
        assert!(out.join("summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("nurse_snapshots.csv")),
            [
                "tick", "nurse_id", "lat", "lon", "alive", "countdown",
                "hot_chocolate", "task", "target_house", "carried_cure",
            ]
        );
        assert_eq!(
            headers(&dir.path().join("deliveries.csv")),
            ["tick", "nurse_id", "house_id", "house", "illness"]
        );
        assert_eq!(headers(&dir.path().join("summaries.csv")), ["tick", "living", "cured_houses"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut dead = snap_row(2, 5);
        dead.alive = false;
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5), dead]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("nurse_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5");      // tick
        assert_eq!(&rows[1][1], "1");      // nurse_id
        assert_eq!(&rows[0][4], "1");      // alive
        assert_eq!(&rows[2][4], "0");
        assert_eq!(&rows[0][7], "patrol");
        assert_eq!(&rows[0][8], "");       // no target
    }

    #[test]
    fn csv_delivery_and_summary_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_delivery(&DeliveryRow {
            tick:     1_230,
            nurse_id: 3,
            house_id: 7,
            house:    "House 7".into(),
            illness:  "Lupus",
        })
        .unwrap();
        w.write_summary(&SummaryRow { tick: 1_000, living: 19, cured_houses: 4 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("deliveries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1230");
        assert_eq!(&rows[0][3], "House 7");
        assert_eq!(&rows[0][4], "Lupus");

        let mut rdr = csv::Reader::from_path(dir.path().join("summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "19");
        assert_eq!(&rows[0][2], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use ns_behavior::NurseController;
    use ns_core::SimConfig;
    use ns_sim::SimBuilder;

    use crate::{CsvWriter, OutputWriter, SimOutputObserver};

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig {
            nurse_count:          3,
            hospital_count:       2,
            house_count:          6,
            duration_ms:          2_000,
            snapshot_interval_ms: 500,
            ..SimConfig::default()
        };

        let mut sim = SimBuilder::new(config.clone(), NurseController::new(config.tuning.clone()))
            .build()
            .unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        let stats = sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        // The run already finished the writer; a second finish is harmless.
        let mut writer = obs.into_writer();
        writer.finish().unwrap();

        let count = |name: &str| {
            csv::Reader::from_path(dir.path().join(name)).unwrap().records().count()
        };
        // Snapshots at 0, 500, 1000, 1500.
        assert_eq!(count("summaries.csv"), 4);
        assert_eq!(count("nurse_snapshots.csv"), 4 * 3);
        assert_eq!(count("deliveries.csv"), stats.deliveries);
    }
}
