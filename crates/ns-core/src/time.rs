//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter measured in simulated
//! milliseconds.  The job queue in `ns-sim` orders work by `Tick`, so the
//! fast movement job (10 ms) and the slow survival job (1 000 ms) share one
//! timeline without floating-point drift.
//!
//! Integer ticks keep comparisons exact: two jobs scheduled for the same
//! millisecond really are simultaneous and run in queue order.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation instant, in milliseconds since start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Tick {
        Tick(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self` (saturating).
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current simulated instant.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// The most recent instant processed by the driver.
    pub now: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward to `tick`.  Moving backwards is ignored.
    #[inline]
    pub fn advance_to(&mut self, tick: Tick) {
        if tick > self.now {
            self.now = tick;
        }
    }

    /// Break elapsed time into (minutes, seconds, milliseconds).
    pub fn elapsed_msm(&self) -> (u64, u64, u64) {
        let ms = self.now.0;
        (ms / 60_000, (ms % 60_000) / 1_000, ms % 1_000)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s, ms) = self.elapsed_msm();
        write!(f, "{} ({:02}:{:02}.{:03})", self.now, m, s, ms)
    }
}
