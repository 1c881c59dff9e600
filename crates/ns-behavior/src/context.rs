//! Mutable simulation state handed to every behavior callback.

use ns_agent::NurseStore;
use ns_core::{Bounds, Tick};
use ns_world::WorldState;

/// Everything a behavior callback may read or write for one job.
///
/// Built by `ns-sim` for each job it runs.  The callback owns the borrow for
/// the duration of that job only, so a movement job and a survival job for
/// the same nurse never overlap; they just see whatever the other left.
pub struct TickContext<'a> {
    /// Simulated instant of the job being run.
    pub now: Tick,

    /// All nurse records.  A callback should only touch its own nurse.
    pub nurses: &'a mut NurseStore,

    /// Shared world.  Writes go through `WorldState::mark_cured`.
    pub world: &'a mut WorldState,

    /// Patrol region.
    pub bounds: Bounds,
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(
        now:    Tick,
        nurses: &'a mut NurseStore,
        world:  &'a mut WorldState,
        bounds: Bounds,
    ) -> Self {
        Self { now, nurses, world, bounds }
    }
}
