//! Unit tests for ns-world.

use ns_core::{HospitalId, HouseId, Illness, Position};

use crate::{CureCatalog, Hospital, House, WorldState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hospital(id: u32, lat: f64, lon: f64) -> Hospital {
    Hospital::new(HospitalId(id), Position::new(lat, lon))
}

fn house(id: u32, illness: Option<Illness>) -> House {
    House::new(HouseId(id), Position::new(65.0, -110.0), illness)
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver_tests {
    use super::*;
    use crate::{is_eligible_house, nearest_hospital};

    #[test]
    fn nearest_picks_minimum_distance() {
        let hospitals = vec![
            hospital(1, 69.0, -100.0),
            hospital(2, 65.5, -110.0),
            hospital(3, 61.0, -130.0),
        ];
        let found = nearest_hospital(Position::new(65.0, -110.0), &hospitals).unwrap();
        assert_eq!(found.id, HospitalId(2));
    }

    #[test]
    fn ties_keep_first_in_input_order() {
        let hospitals = vec![
            hospital(7, 66.0, -110.0),
            hospital(3, 64.0, -110.0),
        ];
        let found = nearest_hospital(Position::new(65.0, -110.0), &hospitals).unwrap();
        assert_eq!(found.id, HospitalId(7));
    }

    #[test]
    fn empty_list_has_no_nearest() {
        assert!(nearest_hospital(Position::new(65.0, -110.0), &[]).is_none());
    }

    #[test]
    fn eligibility() {
        assert!(is_eligible_house(&house(1, Some(Illness::Lupus))));
        assert!(!is_eligible_house(&house(2, None)));

        let mut world = WorldState::new(vec![], vec![house(3, Some(Illness::Lupus))], CureCatalog::standard());
        world.mark_cured(HouseId(3)).unwrap();
        assert!(!is_eligible_house(world.house(HouseId(3)).unwrap()));
    }
}

// ── WorldState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod world_tests {
    use super::*;
    use crate::WorldError;

    #[test]
    fn mark_cured_is_idempotent() {
        let mut world = WorldState::new(
            vec![],
            vec![house(1, Some(Illness::Frostbite)), house(2, None)],
            CureCatalog::standard(),
        );
        assert!(world.mark_cured(HouseId(1)).unwrap());
        assert!(!world.mark_cured(HouseId(1)).unwrap());
        assert!(world.house(HouseId(1)).unwrap().is_cured());
        assert!(!world.house(HouseId(2)).unwrap().is_cured());
        assert_eq!(world.cured_count(), 1);
    }

    #[test]
    fn unknown_house_is_an_error() {
        let mut world = WorldState::new(vec![], vec![house(1, None)], CureCatalog::standard());
        assert!(matches!(
            world.mark_cured(HouseId(9)),
            Err(WorldError::HouseNotFound(HouseId(9)))
        ));
        assert!(world.house(HouseId::INVALID).is_none());
    }

    #[test]
    fn lookup_with_non_dense_ids() {
        let world = WorldState::new(
            vec![],
            vec![house(10, None), house(1, Some(Illness::Lupus))],
            CureCatalog::standard(),
        );
        assert_eq!(world.house(HouseId(1)).unwrap().illness, Some(Illness::Lupus));
        assert_eq!(world.house(HouseId(10)).unwrap().illness, None);
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog_tests {
    use ns_core::{Cure, Illness};

    use crate::CureCatalog;

    #[test]
    fn standard_table() {
        let c = CureCatalog::standard();
        assert_eq!(c.len(), 6);
        assert_eq!(c.cure_for(Illness::Frostbite), Some(Cure::Furnace));
        assert_eq!(c.cure_for(Illness::Loneliness), Some(Cure::TickleMeElmo));
    }

    #[test]
    fn partial_catalog_misses() {
        let c = CureCatalog::from_pairs([(Illness::Lupus, Cure::Voclosporin)]);
        assert_eq!(c.cure_for(Illness::Frostbite), None);
        assert_eq!(c.illnesses().collect::<Vec<_>>(), vec![Illness::Lupus]);
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generate_tests {
    use ns_core::{SimConfig, SimRng};

    use super::*;
    use crate::generate_world;

    #[test]
    fn counts_ids_and_names() {
        let config = SimConfig::default();
        let world = generate_world(&config, CureCatalog::standard(), &mut SimRng::new(1)).unwrap();
        assert_eq!(world.hospitals().len(), 15);
        assert_eq!(world.houses().len(), 40);
        assert_eq!(world.hospitals()[0].id, HospitalId(1));
        assert_eq!(world.hospitals()[14].name, "Hospital 15");
        assert_eq!(world.houses()[39].id, HouseId(40));
        assert_eq!(world.houses()[0].name, "House 1");
        assert!(world.houses().iter().all(|h| !h.is_cured()));
    }

    #[test]
    fn everything_inside_bounds() {
        let config = SimConfig::default();
        let world = generate_world(&config, CureCatalog::standard(), &mut SimRng::new(2)).unwrap();
        let in_region = |p: Position| (60.0..70.0).contains(&p.lat) && (-133.0..-93.0).contains(&p.lon);
        assert!(world.hospitals().iter().all(|h| in_region(h.location)));
        assert!(world.houses().iter().all(|h| in_region(h.location)));
    }

    #[test]
    fn illness_probability_extremes() {
        let always = SimConfig::default();
        let world = generate_world(&always, CureCatalog::standard(), &mut SimRng::new(3)).unwrap();
        assert!(world.houses().iter().all(|h| h.illness.is_some()));

        let never = SimConfig { illness_probability: 0.0, ..SimConfig::default() };
        let world = generate_world(&never, CureCatalog::standard(), &mut SimRng::new(3)).unwrap();
        assert!(world.houses().iter().all(|h| h.illness.is_none()));
    }

    #[test]
    fn same_seed_same_world() {
        let config = SimConfig::default();
        let a = generate_world(&config, CureCatalog::standard(), &mut SimRng::new(9)).unwrap();
        let b = generate_world(&config, CureCatalog::standard(), &mut SimRng::new(9)).unwrap();
        assert_eq!(a.houses(), b.houses());
        assert_eq!(a.hospitals(), b.hospitals());
    }
}
