//! Random world generation.
//!
//! Hospitals are placed first, then houses, all uniformly inside
//! `config.bounds`.  Each house independently rolls for an illness with
//! probability `config.illness_probability`; the illness itself is drawn
//! uniformly from the catalog.

use ns_core::{HospitalId, HouseId, SimConfig, SimRng};

use crate::{CureCatalog, Hospital, House, WorldError, WorldResult, WorldState};

/// Build a fresh world from `config`, drawing from `rng`.
pub fn generate_world(
    config:  &SimConfig,
    catalog: CureCatalog,
    rng:     &mut SimRng,
) -> WorldResult<WorldState> {
    let hospitals = (1..=config.hospital_count)
        .map(|n| {
            let id = HospitalId::try_from(n)
                .map_err(|_| WorldError::Generation(format!("hospital count {n} overflows u32")))?;
            Ok(Hospital::new(id, rng.location(&config.bounds)))
        })
        .collect::<WorldResult<Vec<_>>>()?;

    let illnesses: Vec<_> = catalog.illnesses().collect();
    let houses = (1..=config.house_count)
        .map(|n| {
            let id = HouseId::try_from(n)
                .map_err(|_| WorldError::Generation(format!("house count {n} overflows u32")))?;
            let location = rng.location(&config.bounds);
            let illness = if rng.gen_bool(config.illness_probability) {
                rng.choose(&illnesses).copied()
            } else {
                None
            };
            Ok(House::new(id, location, illness))
        })
        .collect::<WorldResult<Vec<_>>>()?;

    Ok(WorldState::new(hospitals, houses, catalog))
}
