//! Core nurse storage: `NurseStore` (SoA data) and `NurseSnapshot`.

use ns_core::{AgentId, Cure, Position, Velocity};

use crate::Task;

// ── NurseStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every nurse.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];
/// ```
///
/// Records are never removed.  A dead nurse keeps its last values so
/// observers can still see where it fell.
#[derive(Debug, Clone)]
pub struct NurseStore {
    /// Number of nurses.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub position: Vec<Position>,

    /// Patrol velocity; ignored while heading somewhere.
    pub velocity: Vec<Velocity>,

    /// Starts `true`; once `false` it never flips back.
    pub alive: Vec<bool>,

    /// Survival ticks left before a hot chocolate is consumed.
    pub countdown: Vec<u32>,

    /// Consumable survival stock.  Unsigned, so it can never go negative.
    pub hot_chocolate: Vec<u32>,

    pub task: Vec<Task>,
}

impl NurseStore {
    /// `true` if there are no nurses.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    #[inline]
    pub fn is_alive(&self, agent: AgentId) -> bool {
        self.alive[agent.index()]
    }

    pub fn living_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    /// Copy out everything an observer can see about `agent`.
    pub fn snapshot(&self, agent: AgentId) -> NurseSnapshot {
        let i = agent.index();
        NurseSnapshot {
            agent,
            position:      self.position[i],
            alive:         self.alive[i],
            countdown:     self.countdown[i],
            hot_chocolate: self.hot_chocolate[i],
            task:          self.task[i],
        }
    }

    /// Package-private constructor used by `NurseStoreBuilder`.
    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            count:         0,
            position:      Vec::with_capacity(count),
            velocity:      Vec::with_capacity(count),
            alive:         Vec::with_capacity(count),
            countdown:     Vec::with_capacity(count),
            hot_chocolate: Vec::with_capacity(count),
            task:          Vec::with_capacity(count),
        }
    }

    pub(crate) fn push(&mut self, position: Position, velocity: Velocity, countdown: u32, hot_chocolate: u32) {
        self.position.push(position);
        self.velocity.push(velocity);
        self.alive.push(true);
        self.countdown.push(countdown);
        self.hot_chocolate.push(hot_chocolate);
        self.task.push(Task::Patrol);
        self.count += 1;
    }
}

// ── NurseSnapshot ─────────────────────────────────────────────────────────────

/// Point-in-time copy of one nurse's observable state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NurseSnapshot {
    pub agent:         AgentId,
    pub position:      Position,
    pub alive:         bool,
    pub countdown:     u32,
    pub hot_chocolate: u32,
    pub task:          Task,
}

impl NurseSnapshot {
    #[inline]
    pub fn carried_cure(&self) -> Option<Cure> {
        self.task.carried_cure()
    }
}
