//! Unit tests for ns-gateway.

#[cfg(test)]
mod report_tests {
    use crate::{LocationReport, ReportError, ReportRegistry};

    #[test]
    fn parses_valid_report() {
        let r = LocationReport::from_json(r#"{"agentId":"Nurse 3","lat":65.5,"lon":-100.25}"#).unwrap();
        assert_eq!(r.agent_id, "Nurse 3");
        assert_eq!(r.position.lat, 65.5);
        assert_eq!(r.position.lon, -100.25);
    }

    #[test]
    fn numeric_agent_id_accepted() {
        let r = LocationReport::from_json(r#"{"agentId":7,"lat":1,"lon":2}"#).unwrap();
        assert_eq!(r.agent_id, "7");
        assert_eq!(r.position.lat, 1.0);
    }

    #[test]
    fn missing_coordinate_rejected() {
        let err = LocationReport::from_json(r#"{"agentId":"a","lon":2.0}"#).unwrap_err();
        assert_eq!(err, ReportError::MissingCoordinate("lat"));
        assert_eq!(err.status_code(), 400);

        let err = LocationReport::from_json(r#"{"agentId":"a","lat":1.0,"lon":null}"#).unwrap_err();
        assert_eq!(err, ReportError::MissingCoordinate("lon"));
    }

    #[test]
    fn non_numeric_coordinate_rejected() {
        let err = LocationReport::from_json(r#"{"agentId":"a","lat":"65.1","lon":2.0}"#).unwrap_err();
        assert!(matches!(err, ReportError::InvalidCoordinate { field: "lat", .. }));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let err = LocationReport::new("a", f64::NAN, 0.0).unwrap_err();
        assert!(matches!(err, ReportError::InvalidCoordinate { field: "lat", .. }));
        assert!(LocationReport::new("a", 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn malformed_body_rejected() {
        for body in ["not json", "[1, 2]", r#"{"lat":1,"lon":2}"#, r#"{"agentId":true,"lat":1,"lon":2}"#] {
            let err = LocationReport::from_json(body).unwrap_err();
            assert!(matches!(err, ReportError::Malformed(_)), "{body}: {err}");
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn registry_keeps_latest() {
        let mut reg = ReportRegistry::new();
        assert!(reg.is_empty());
        let first = LocationReport::new("x", 1.0, 2.0).unwrap();
        let second = LocationReport::new("x", 3.0, 4.0).unwrap();
        assert_eq!(reg.update(&first), None);
        assert_eq!(reg.update(&second), Some(first.position));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("x"), Some(second.position));
        assert_eq!(reg.get("y"), None);
    }
}

#[cfg(test)]
mod envelope_tests {
    use ns_behavior::{CureDelivered, LocationUpdate};
    use ns_core::{AgentId, Cure, HospitalId, HouseId, Illness, Position, Tick};
    use ns_world::{CureCatalog, Hospital, House, WorldState};
    use serde_json::{json, Value};

    use crate::{Envelope, Greeting, ReportedLocation};

    fn to_value(env: &Envelope) -> Value {
        serde_json::from_str(&env.to_json().unwrap()).unwrap()
    }

    #[test]
    fn location_update_wire_format() {
        let env = Envelope::LocationUpdate(LocationUpdate {
            agent_id:      AgentId(2),
            lat:           65.0,
            lon:           -100.0,
            alive:         true,
            countdown:     17,
            hot_chocolate: 1,
            carried_cure:  Some(Cure::Furnace),
        });
        assert_eq!(
            to_value(&env),
            json!({
                "event": "locationUpdate",
                "data": {
                    "agentId": "Nurse 3",
                    "lat": 65.0,
                    "lon": -100.0,
                    "alive": true,
                    "countdown": 17,
                    "resource": 1,
                    "carriedCure": "A furnace",
                }
            })
        );
    }

    #[test]
    fn reported_location_shares_event_name() {
        let env = Envelope::ReportedLocation(ReportedLocation {
            agent_id: "ext-1".into(),
            lat:      61.0,
            lon:      -95.5,
        });
        assert_eq!(
            to_value(&env),
            json!({"event": "locationUpdate", "data": {"agentId": "ext-1", "lat": 61.0, "lon": -95.5}})
        );
    }

    #[test]
    fn cure_delivered_carries_house_state() {
        let mut house = House::new(HouseId(4), Position::new(66.0, -110.0), Some(Illness::Lupus));
        let mut world = WorldState::new(vec![], vec![house.clone()], CureCatalog::standard());
        world.mark_cured(HouseId(4)).unwrap();
        house = world.house(HouseId(4)).unwrap().clone();

        let env = Envelope::CureDelivered(CureDelivered { agent_id: AgentId(0), house, at: Tick(50) });
        let v = to_value(&env);
        assert_eq!(v["event"], "cureDelivered");
        assert_eq!(v["data"]["agentId"], "Nurse 1");
        assert_eq!(v["data"]["house"]["name"], "House 4");
        assert_eq!(v["data"]["house"]["cured"], true);
        assert!(v["data"].get("at").is_none());
    }

    #[test]
    fn greeting_snapshots_world() {
        let hospitals = vec![Hospital::new(HospitalId(1), Position::new(62.0, -120.0))];
        let houses = vec![
            House::new(HouseId(1), Position::new(63.0, -110.0), Some(Illness::Alcoholism)),
            House::new(HouseId(2), Position::new(64.0, -100.0), None),
        ];
        let mut world = WorldState::new(hospitals, houses, CureCatalog::standard());
        world.mark_cured(HouseId(1)).unwrap();

        let greeting = Greeting::from_world(&world);
        assert_eq!(greeting.hospitals.len(), 1);
        assert!(greeting.houses[0].is_cured());
        assert!(!greeting.houses[1].is_cured());

        let [h, hs] = greeting.envelopes();
        assert_eq!(h.event(), "hospitals");
        assert_eq!(to_value(&hs)["data"][0]["cured"], true);
        assert_eq!(to_value(&h)["data"][0]["name"], "Hospital 1");
    }
}

#[cfg(test)]
mod gateway_tests {
    use ns_behavior::NurseController;
    use ns_core::SimConfig;
    use ns_sim::SimBuilder;
    use ns_world::WorldState;

    use crate::{Envelope, Gateway, GatewayObserver, LocationReport, ReportedLocation};

    fn reported(lat: f64) -> Envelope {
        Envelope::ReportedLocation(ReportedLocation { agent_id: "r".into(), lat, lon: 0.0 })
    }

    #[test]
    fn publish_without_observers_is_not_an_error() {
        let gateway = Gateway::new();
        assert_eq!(gateway.observer_count(), 0);
        assert_eq!(gateway.publish(reported(1.0)), 0);
    }

    #[test]
    fn every_connection_gets_every_message() {
        let gateway = Gateway::new();
        let world = WorldState::default();
        let mut a = gateway.connect(&world);
        let mut b = gateway.connect(&world);

        assert_eq!(gateway.publish(reported(1.0)), 2);
        assert_eq!(a.try_recv(), Some(reported(1.0)));
        assert_eq!(b.try_recv(), Some(reported(1.0)));
        assert_eq!(a.try_recv(), None);
    }

    #[test]
    fn lagging_observer_skips_ahead() {
        let gateway = Gateway::with_capacity(2);
        let mut conn = gateway.connect(&WorldState::default());
        for i in 0..5 {
            gateway.publish(reported(i as f64));
        }
        assert_eq!(conn.try_recv(), Some(reported(3.0)));
        assert_eq!(conn.try_recv(), Some(reported(4.0)));
        assert_eq!(conn.try_recv(), None);
    }

    #[tokio::test]
    async fn recv_ends_when_gateway_dropped() {
        let gateway = Gateway::new();
        let mut conn = gateway.connect(&WorldState::default());
        gateway.publish(reported(2.0));
        drop(gateway);
        assert_eq!(conn.recv().await, Some(reported(2.0)));
        assert_eq!(conn.recv().await, None);
    }

    #[tokio::test]
    async fn valid_report_updates_registry_and_broadcasts() {
        let gateway = Gateway::new();
        let mut conn = gateway.connect(&WorldState::default());

        let out = gateway
            .handle_report(r#"{"agentId":"ext","lat":64.5,"lon":-99.0}"#)
            .await
            .unwrap();
        assert_eq!(out.agent_id, "ext");

        let reports = gateway.reports().await;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports.get("ext").map(|p| p.lat), Some(64.5));
        drop(reports);

        let env = conn.recv().await.unwrap();
        assert_eq!(env.event(), "locationUpdate");
        assert_eq!(env, Envelope::ReportedLocation(out));
    }

    #[tokio::test]
    async fn invalid_report_changes_nothing() {
        let gateway = Gateway::new();
        let mut conn = gateway.connect(&WorldState::default());
        gateway.report_location(LocationReport::new("keep", 1.0, 1.0).unwrap()).await;
        assert!(conn.try_recv().is_some());

        let err = gateway
            .handle_report(r#"{"agentId":"keep","lat":"north","lon":1.0}"#)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let reports = gateway.reports().await;
        assert_eq!(reports.len(), 1);
        assert_eq!(reports.get("keep").map(|p| p.lat), Some(1.0));
        assert_eq!(conn.try_recv(), None);
    }

    #[test]
    fn observer_streams_simulation_events() {
        let config = SimConfig {
            nurse_count:          2,
            hospital_count:       2,
            house_count:          4,
            duration_ms:          100,
            snapshot_interval_ms: 0,
            ..SimConfig::default()
        };
        let mut sim = SimBuilder::new(config.clone(), NurseController::new(config.tuning.clone()))
            .build()
            .unwrap();

        let gateway = Gateway::new();
        let mut conn = gateway.connect(&sim.world);
        assert_eq!(conn.greeting.houses.len(), 4);

        let mut obs = GatewayObserver::new(gateway.clone());
        assert_eq!(obs.gateway().observer_count(), 1);
        let stats = sim.run(&mut obs);

        let mut updates = 0;
        let mut deliveries = 0;
        while let Some(env) = conn.try_recv() {
            match env {
                Envelope::LocationUpdate(_) => updates += 1,
                Envelope::CureDelivered(_) => deliveries += 1,
                other => panic!("unexpected {other:?}"),
            }
        }
        // Two nurses, one movement job every 10 ms for 100 ms.
        assert_eq!(updates, 20);
        assert_eq!(deliveries, stats.deliveries);
    }
}
