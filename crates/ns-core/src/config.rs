//! Top-level simulation configuration.
//!
//! Defaults reproduce the reference scenario: 20 nurses, 15 hospitals and
//! 40 houses in [`Bounds::REGION`], a 10 ms movement tick and a 1 s survival
//! tick.  Applications typically load a JSON file over these defaults (see
//! the `patrol` demo).

use crate::{Bounds, CoreError, CoreResult, DEFAULT_PROXIMITY, Tick};

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Behavioral constants for nurses.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Distance travelled per movement tick when heading somewhere.
    pub travel_speed: f64,

    /// Upper bound of each patrol velocity component; initial components are
    /// drawn from `[-patrol_speed / 2, patrol_speed / 2)`.
    pub patrol_speed: f64,

    /// Distance at or below which a nurse counts as arrived.
    pub proximity: f64,

    /// Survival ticks granted by a resupply, delivery or consumed hot chocolate.
    pub countdown: u32,

    /// Hot chocolate each nurse starts with.
    pub initial_hot_chocolate: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            travel_speed:          0.001,
            patrol_speed:          0.001,
            proximity:             DEFAULT_PROXIMITY,
            countdown:             40,
            initial_hot_chocolate: 2,
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    pub nurse_count:    usize,
    pub hospital_count: usize,
    pub house_count:    usize,

    /// Probability that a generated house has an illness.
    pub illness_probability: f64,

    /// The region everything lives in.
    pub bounds: Bounds,

    /// Movement job period in milliseconds.
    pub movement_period_ms: u64,

    /// Survival job period in milliseconds.
    pub survival_period_ms: u64,

    /// Simulated run length in milliseconds for [`end_tick`](Self::end_tick).
    pub duration_ms: u64,

    /// Snapshot every N milliseconds; 0 disables snapshots.
    pub snapshot_interval_ms: u64,

    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                 42,
            nurse_count:          20,
            hospital_count:       15,
            house_count:          40,
            illness_probability:  1.0,
            bounds:               Bounds::REGION,
            movement_period_ms:   10,
            survival_period_ms:   1_000,
            duration_ms:          120_000,
            snapshot_interval_ms: 1_000,
            tuning:               Tuning::default(),
        }
    }
}

impl SimConfig {
    /// The instant at which `Sim::run` stops (exclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.duration_ms)
    }

    /// Reject configurations the driver cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.movement_period_ms == 0 {
            return Err(CoreError::Config("movement_period_ms must be > 0".into()));
        }
        if self.survival_period_ms == 0 {
            return Err(CoreError::Config("survival_period_ms must be > 0".into()));
        }
        if !self.bounds.is_valid() {
            return Err(CoreError::Config(format!("empty bounds {:?}", self.bounds)));
        }
        if !(0.0..=1.0).contains(&self.illness_probability) {
            return Err(CoreError::Config(format!(
                "illness_probability {} outside [0, 1]",
                self.illness_probability
            )));
        }
        if !(self.tuning.travel_speed > 0.0) || !(self.tuning.proximity >= 0.0) {
            return Err(CoreError::Config("travel_speed must be > 0 and proximity >= 0".into()));
        }
        Ok(())
    }
}
