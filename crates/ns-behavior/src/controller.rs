//! `NurseController` — the per-tick nurse state machine.
//!
//! One movement tick runs, in order:
//!
//! 1. skip if the nurse is dead;
//! 2. reconcile the task with the stock and the world;
//! 3. move according to the task (at most one hospital/house arrival);
//! 4. emit a [`LocationUpdate`];
//! 5. scan eligible houses within proximity, committing to one or handing
//!    over the carried cure.
//!
//! Survival ticks are delegated to [`survival::survival_step`].

use ns_agent::Task;
use ns_core::{AgentId, HouseId, Position, Tuning};
use ns_world::{is_eligible_house, nearest_hospital};
use tracing::{debug, trace, warn};

use crate::{survival, CureDelivered, EventSink, LocationUpdate, NurseBehavior, TickContext};

/// The standard nurse behavior.
#[derive(Debug, Clone, Default)]
pub struct NurseController {
    tuning: Tuning,
}

impl NurseController {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    // ── Task bookkeeping ─────────────────────────────────────────────────────

    /// Bring the stored task in line with the nurse's stock and the world.
    ///
    /// A target house missing from the world drops the nurse back to patrol
    /// (and loses any carried cure).  Then an empty patrolling nurse starts
    /// resupplying, and a resupplying nurse that somehow holds stock goes
    /// back to patrol.  Committed tasks are never preempted by low stock.
    fn reconcile(&self, agent: AgentId, ctx: &mut TickContext<'_>) -> Task {
        let i = agent.index();
        let mut task = ctx.nurses.task[i];

        if let Some(house) = task.target() {
            if ctx.world.house(house).is_none() {
                warn!(agent = %agent, house = %house, "target house missing, returning to patrol");
                task = Task::Patrol;
            }
        }

        let stock = ctx.nurses.hot_chocolate[i];
        task = match task {
            Task::Patrol if stock < 1 => Task::Resupplying,
            Task::Resupplying if stock >= 1 => Task::Patrol,
            other => other,
        };

        ctx.nurses.task[i] = task;
        task
    }

    /// Hospital visit or delivery: one hot chocolate and a full countdown.
    fn refill(&self, i: usize, ctx: &mut TickContext<'_>) {
        ctx.nurses.hot_chocolate[i] = ctx.nurses.hot_chocolate[i].saturating_add(1);
        ctx.nurses.countdown[i] = self.tuning.countdown;
    }

    /// Step toward `target`; returns `true` on arrival.
    fn travel(&self, i: usize, target: Position, ctx: &mut TickContext<'_>) -> bool {
        let next = ctx.nurses.position[i].step_toward(target, self.tuning.travel_speed);
        ctx.nurses.position[i] = next;
        next.is_close(target, self.tuning.proximity)
    }

    // ── Movement ─────────────────────────────────────────────────────────────

    fn advance(&self, agent: AgentId, task: Task, ctx: &mut TickContext<'_>, sink: &mut dyn EventSink) {
        let i = agent.index();
        match task {
            Task::Delivering { house, .. } => {
                let Some(target) = ctx.world.house(house).map(|h| h.location) else {
                    return;
                };
                if self.travel(i, target, ctx) {
                    self.deliver(agent, house, ctx, sink);
                }
            }

            Task::FetchingCure { house } => {
                let here = ctx.nurses.position[i];
                let Some(hospital) = nearest_hospital(here, ctx.world.hospitals()).map(|h| h.location) else {
                    return;
                };
                if self.travel(i, hospital, ctx) {
                    self.refill(i, ctx);
                    let cure = ctx
                        .world
                        .house(house)
                        .and_then(|h| h.illness)
                        .and_then(|illness| ctx.world.cure_for(illness));
                    ctx.nurses.task[i] = match cure {
                        Some(cure) => {
                            debug!(agent = %agent, house = %house, %cure, "picked up cure");
                            Task::Delivering { house, cure }
                        }
                        None => {
                            warn!(agent = %agent, house = %house, "no cure available for target, returning to patrol");
                            Task::Patrol
                        }
                    };
                }
            }

            Task::Resupplying => {
                let here = ctx.nurses.position[i];
                let Some(hospital) = nearest_hospital(here, ctx.world.hospitals()).map(|h| h.location) else {
                    return;
                };
                if self.travel(i, hospital, ctx) {
                    self.refill(i, ctx);
                    ctx.nurses.task[i] = Task::Patrol;
                    trace!(agent = %agent, "resupplied");
                }
            }

            Task::Patrol => {
                let (pos, vel) = ctx.bounds.reflect(ctx.nurses.position[i], ctx.nurses.velocity[i]);
                ctx.nurses.position[i] = pos;
                ctx.nurses.velocity[i] = vel;
            }
        }
    }

    /// Hand a cure to `house`.
    ///
    /// The house flag flips at most once, but the nurse is rewarded and a
    /// [`CureDelivered`] is emitted even when another nurse got there first.
    fn deliver(&self, agent: AgentId, house: HouseId, ctx: &mut TickContext<'_>, sink: &mut dyn EventSink) {
        let i = agent.index();
        ctx.nurses.task[i] = Task::Patrol;

        let first = match ctx.world.mark_cured(house) {
            Ok(first) => first,
            Err(e) => {
                warn!(agent = %agent, error = %e, "delivery target vanished");
                return;
            }
        };
        self.refill(i, ctx);
        debug!(agent = %agent, house = %house, first, "cure delivered");

        if let Some(state) = ctx.world.house(house) {
            sink.cure_delivered(&CureDelivered {
                agent_id: agent,
                house:    state.clone(),
                at:       ctx.now,
            });
        }
    }

    // ── Proximity scan ───────────────────────────────────────────────────────

    /// Look at every eligible house within proximity other than the current
    /// target.  An empty-handed nurse commits to it (the last such house
    /// wins); a nurse carrying the matching cure delivers on the spot.
    fn scan_houses(&self, agent: AgentId, ctx: &mut TickContext<'_>, sink: &mut dyn EventSink) {
        let i = agent.index();
        let here = ctx.nurses.position[i];

        for slot in 0..ctx.world.houses().len() {
            let (id, illness) = {
                let house = &ctx.world.houses()[slot];
                if !is_eligible_house(house) || !here.is_close(house.location, self.tuning.proximity) {
                    continue;
                }
                (house.id, house.illness)
            };

            let task = ctx.nurses.task[i];
            if task.target() == Some(id) {
                continue;
            }

            match task.carried_cure() {
                None => {
                    trace!(agent = %agent, house = %id, "committed to house");
                    ctx.nurses.task[i] = Task::FetchingCure { house: id };
                }
                Some(carried) => {
                    let needed = illness.and_then(|ill| ctx.world.cure_for(ill));
                    if needed == Some(carried) {
                        self.deliver(agent, id, ctx, sink);
                    }
                }
            }
        }
    }
}

impl NurseBehavior for NurseController {
    fn movement_tick(&self, agent: AgentId, ctx: &mut TickContext<'_>, sink: &mut dyn EventSink) {
        if !ctx.nurses.is_alive(agent) {
            return;
        }

        let task = self.reconcile(agent, ctx);
        self.advance(agent, task, ctx, sink);

        sink.location_update(&LocationUpdate::from(ctx.nurses.snapshot(agent)));

        self.scan_houses(agent, ctx, sink);
    }

    fn survival_tick(&self, agent: AgentId, ctx: &mut TickContext<'_>, sink: &mut dyn EventSink) {
        survival::survival_step(agent, ctx.nurses, self.tuning.countdown, sink);
    }
}
