//! The `WorldState` registry.

use ns_core::{Cure, HouseId, Illness};

use crate::{CureCatalog, Hospital, House, WorldError, WorldResult};

/// Owns every hospital, house and the cure catalog.
///
/// Collections are never resized after construction.  Reads hand out shared
/// slices; the single write path is [`mark_cured`](Self::mark_cured), which
/// keeps the `cured` flag monotonic.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldState {
    hospitals: Vec<Hospital>,
    houses:    Vec<House>,
    catalog:   CureCatalog,
}

impl WorldState {
    pub fn new(hospitals: Vec<Hospital>, houses: Vec<House>, catalog: CureCatalog) -> Self {
        Self { hospitals, houses, catalog }
    }

    #[inline]
    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    #[inline]
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    #[inline]
    pub fn catalog(&self) -> &CureCatalog {
        &self.catalog
    }

    /// Look up a house by id.
    ///
    /// Generated worlds store house `n` at slot `n - 1`, so the common case is
    /// O(1); hand-built worlds with arbitrary ids fall back to a scan.
    pub fn house(&self, id: HouseId) -> Option<&House> {
        self.position_of(id).map(|i| &self.houses[i])
    }

    /// The cure the catalog prescribes for `illness`.
    #[inline]
    pub fn cure_for(&self, illness: Illness) -> Option<Cure> {
        self.catalog.cure_for(illness)
    }

    /// Flip house `id` to cured.
    ///
    /// Idempotent: returns `Ok(true)` for the call that performed the
    /// transition and `Ok(false)` for any later call.
    pub fn mark_cured(&mut self, id: HouseId) -> WorldResult<bool> {
        let i = self.position_of(id).ok_or(WorldError::HouseNotFound(id))?;
        Ok(self.houses[i].mark_cured())
    }

    /// Number of houses with `cured == true`.
    pub fn cured_count(&self) -> usize {
        self.houses.iter().filter(|h| h.is_cured()).count()
    }

    fn position_of(&self, id: HouseId) -> Option<usize> {
        if let Some(slot) = id.slot() {
            if self.houses.get(slot).is_some_and(|h| h.id == id) {
                return Some(slot);
            }
        }
        self.houses.iter().position(|h| h.id == id)
    }
}
