//! Fluent builder for constructing a [`Sim`].

use ns_agent::{NurseStore, NurseStoreBuilder};
use ns_behavior::NurseBehavior;
use ns_core::{SimClock, SimConfig, SimRng, Tick};
use ns_world::{generate_world, CureCatalog, WorldState};
use tracing::debug;

use crate::{Job, JobQueue, Sim, SimError, SimResult};

/// Stream ids for [`SimRng::child`].
const WORLD_STREAM: u64 = 1;
const PHASE_STREAM: u64 = 2;

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, counts, periods, duration, tuning
/// - `B: NurseBehavior`: usually [`ns_behavior::NurseController`]
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                              |
/// |-----------------|------------------------------------------------------|
/// | `.world(w)`     | `generate_world` from the config and seed            |
/// | `.catalog(c)`   | `CureCatalog::standard()` (ignored with `.world`)    |
/// | `.nurses(s)`    | `NurseStoreBuilder` from the config and seed         |
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::default();
/// let mut sim = SimBuilder::new(config.clone(), NurseController::new(config.tuning))
///     .build()?;
/// let stats = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<B: NurseBehavior> {
    config:   SimConfig,
    behavior: B,
    world:    Option<WorldState>,
    catalog:  Option<CureCatalog>,
    nurses:   Option<NurseStore>,
}

impl<B: NurseBehavior> SimBuilder<B> {
    pub fn new(config: SimConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            world:   None,
            catalog: None,
            nurses:  None,
        }
    }

    /// Use a prepared world instead of generating one.
    pub fn world(mut self, world: WorldState) -> Self {
        self.world = Some(world);
        self
    }

    /// Illness → cure table for the generated world.
    pub fn catalog(mut self, catalog: CureCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use prepared nurses.  Must hold exactly `config.nurse_count` records.
    pub fn nurses(mut self, nurses: NurseStore) -> Self {
        self.nurses = Some(nurses);
        self
    }

    /// Validate inputs, place both periodic jobs of every nurse at a random
    /// phase, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        let config = self.config;
        config.validate()?;

        let mut rng = SimRng::new(config.seed);

        // ── World ─────────────────────────────────────────────────────────
        let world = match self.world {
            Some(w) => w,
            None => {
                let catalog = self.catalog.unwrap_or_default();
                generate_world(&config, catalog, &mut rng.child(WORLD_STREAM))?
            }
        };

        // ── Nurses ────────────────────────────────────────────────────────
        let nurses = match self.nurses {
            Some(n) => {
                if n.count != config.nurse_count {
                    return Err(SimError::CountMismatch {
                        expected: config.nurse_count,
                        got:      n.count,
                        what:     "nurse",
                    });
                }
                n
            }
            None => NurseStoreBuilder::new(config.nurse_count, config.seed)
                .bounds(config.bounds)
                .tuning(&config.tuning)
                .build(),
        };

        // ── Job queue with random phases ──────────────────────────────────
        //
        // Offsets are independent per job, so within one window either job
        // of a nurse may run first.
        let mut phase = rng.child(PHASE_STREAM);
        let mut jobs = JobQueue::new();
        for agent in nurses.agent_ids() {
            let movement = phase.phase(config.movement_period_ms);
            let survival = phase.phase(config.survival_period_ms);
            jobs.push(Tick(movement), Job::movement(agent));
            jobs.push(Tick(survival), Job::survival(agent));
        }
        debug!(jobs = jobs.len(), ticks = jobs.tick_count(), "job queue seeded");

        Ok(Sim {
            clock:         SimClock::new(),
            config,
            nurses,
            world,
            jobs,
            behavior:      self.behavior,
            deaths:        0,
            deliveries:    0,
            jobs_run:      0,
            next_snapshot: Tick::ZERO,
        })
    }
}
