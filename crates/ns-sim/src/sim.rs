//! The `Sim` struct and its job loop.

use ns_agent::{NurseSnapshot, NurseStore};
use ns_behavior::{CureDelivered, EventSink, LocationUpdate, NurseBehavior, TickContext};
use ns_core::{AgentId, CoreError, SimClock, SimConfig, Tick};
use ns_world::WorldState;
use tracing::{debug, info};

use crate::{JobKind, JobQueue, SimObserver, SimResult, SimStats};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Jobs run one at a time in tick order:
///
/// 1. **Pop** the earliest tick and every job due at it.
/// 2. **Run** each job for a living nurse through the behavior model,
///    forwarding events to the observer.
/// 3. **Reschedule** the job one period later, unless the nurse is now dead.
///
/// Snapshots are taken every `config.snapshot_interval_ms`, before the jobs
/// due at that instant run.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: NurseBehavior> {
    pub config: SimConfig,

    /// Tracks the instant of the last processed job (or `run_until` target).
    pub clock: SimClock,

    pub nurses: NurseStore,

    pub world: WorldState,

    /// Pending periodic jobs.
    pub jobs: JobQueue,

    pub behavior: B,

    pub(crate) deaths:        usize,
    pub(crate) deliveries:    usize,
    pub(crate) jobs_run:      u64,
    pub(crate) next_snapshot: Tick,
}

impl<B: NurseBehavior> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current instant to `config.end_tick()`.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimStats {
        let end = self.config.end_tick();
        info!(
            nurses    = self.nurses.count,
            hospitals = self.world.hospitals().len(),
            houses    = self.world.houses().len(),
            end       = %end,
            "simulation starting"
        );

        self.run_until(end, observer);

        let stats = self.stats();
        observer.on_sim_end(self.clock.now, &stats);
        info!(
            living     = stats.living,
            deaths     = stats.deaths,
            cured      = stats.cured_houses,
            deliveries = stats.deliveries,
            "simulation finished"
        );
        stats
    }

    /// Process every job due strictly before `until`, then move the clock
    /// to `until`.
    ///
    /// Calling this repeatedly with increasing targets is equivalent to one
    /// call with the last target; the real-time demo uses it to pace the
    /// simulation against the wall clock.
    pub fn run_until<O: SimObserver>(&mut self, until: Tick, observer: &mut O) {
        while let Some(next) = self.jobs.next_tick() {
            if next >= until {
                break;
            }
            self.flush_snapshots(next + 1, observer);
            self.step(observer);
        }
        self.flush_snapshots(until, observer);
        self.clock.advance_to(until);
    }

    /// Run every job due at the earliest queued tick.
    ///
    /// Returns that tick, or `None` when the queue is empty (every nurse is
    /// dead).  Snapshots are not taken here; see [`run_until`](Self::run_until).
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<Tick> {
        let (now, due) = self.jobs.pop_next()?;
        self.clock.advance_to(now);

        let Sim { config, nurses, world, jobs, behavior, deaths, deliveries, jobs_run, .. } = self;
        let mut sink = Tally { inner: observer, deaths, deliveries };

        for job in due {
            if !nurses.is_alive(job.agent) {
                continue;
            }

            let mut ctx = TickContext::new(now, nurses, world, config.bounds);
            let period = match job.kind {
                JobKind::Movement => {
                    behavior.movement_tick(job.agent, &mut ctx, &mut sink);
                    config.movement_period_ms
                }
                JobKind::Survival => {
                    behavior.survival_tick(job.agent, &mut ctx, &mut sink);
                    config.survival_period_ms
                }
            };
            *jobs_run += 1;

            if nurses.is_alive(job.agent) {
                jobs.push(now + period, job);
            }
        }

        Some(now)
    }

    /// Counters as of the current clock.
    pub fn stats(&self) -> SimStats {
        SimStats {
            now:          self.clock.now,
            living:       self.nurses.living_count(),
            deaths:       self.deaths,
            cured_houses: self.world.cured_count(),
            deliveries:   self.deliveries,
            jobs_run:     self.jobs_run,
        }
    }

    /// Everything an observer can see about one nurse.
    pub fn nurse(&self, agent: AgentId) -> SimResult<NurseSnapshot> {
        if !self.nurses.contains(agent) {
            return Err(CoreError::AgentNotFound(agent).into());
        }
        Ok(self.nurses.snapshot(agent))
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    /// Emit every pending snapshot scheduled strictly before `before`.
    fn flush_snapshots<O: SimObserver>(&mut self, before: Tick, observer: &mut O) {
        let interval = self.config.snapshot_interval_ms;
        if interval == 0 {
            return;
        }
        while self.next_snapshot < before {
            let at = self.next_snapshot;
            debug!(
                now    = %at,
                living = self.nurses.living_count(),
                cured  = self.world.cured_count(),
                "snapshot"
            );
            observer.on_snapshot(at, &self.nurses, &self.world);
            self.next_snapshot = at + interval;
        }
    }
}

// ── Event tally ───────────────────────────────────────────────────────────────

/// Forwards events to the observer while counting deaths and deliveries.
struct Tally<'a, O: ?Sized> {
    inner:      &'a mut O,
    deaths:     &'a mut usize,
    deliveries: &'a mut usize,
}

impl<O: EventSink + ?Sized> EventSink for Tally<'_, O> {
    fn location_update(&mut self, update: &LocationUpdate) {
        if !update.alive {
            *self.deaths += 1;
        }
        self.inner.location_update(update);
    }

    fn cure_delivered(&mut self, delivery: &CureDelivered) {
        *self.deliveries += 1;
        self.inner.cure_delivered(delivery);
    }
}
