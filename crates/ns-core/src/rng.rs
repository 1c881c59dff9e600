//! Seeded randomness for spawning nurses, placing the world and phasing jobs.
//!
//! Two generators, both `SmallRng` underneath:
//!
//! - [`AgentRng`] is built per nurse from `global_seed ^ id * MIXING_CONSTANT`
//!   and used once, at spawn.  Nurse `n` therefore lands in the same place for
//!   a given seed regardless of how many nurses are spawned after it.
//! - [`SimRng`] is the run-level stream.  Setup stages each take a
//!   [`child`](SimRng::child) so adding draws to one stage (say, more houses)
//!   leaves the others untouched.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Bounds, Position, Velocity};

/// 64-bit fractional golden ratio; spreads consecutive ids across the seed space.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Spawn-time randomness for one nurse.
pub struct AgentRng(SmallRng);

impl AgentRng {
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform start position inside `bounds`.
    #[inline]
    pub fn spawn_position(&mut self, bounds: &Bounds) -> Position {
        bounds.sample(&mut self.0)
    }

    /// Patrol velocity with each component in `[-speed / 2, speed / 2)`.
    pub fn patrol_velocity(&mut self, speed: f64) -> Velocity {
        let d_lat = (self.0.r#gen::<f64>() - 0.5) * speed;
        let d_lon = (self.0.r#gen::<f64>() - 0.5) * speed;
        Velocity::new(d_lat, d_lon)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level generator, driven from the builder thread only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Independent stream for one setup stage, keyed by `stream`.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform point inside `bounds`.
    #[inline]
    pub fn location(&mut self, bounds: &Bounds) -> Position {
        bounds.sample(&mut self.0)
    }

    /// First firing offset for a job repeating every `period_ms`, in
    /// `[0, period_ms)`.  A zero period yields 0.
    pub fn phase(&mut self, period_ms: u64) -> u64 {
        if period_ms == 0 {
            return 0;
        }
        self.0.gen_range(0..period_ms)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform pick; `None` on an empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
