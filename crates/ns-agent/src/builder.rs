//! Fluent builder for a freshly spawned `NurseStore`.
//!
//! # Usage
//!
//! ```rust
//! use ns_agent::NurseStoreBuilder;
//! use ns_core::{Bounds, Tuning};
//!
//! let store = NurseStoreBuilder::new(20, /*seed=*/ 42)
//!     .bounds(Bounds::REGION)
//!     .tuning(&Tuning::default())
//!     .build();
//!
//! assert_eq!(store.count, 20);
//! assert_eq!(store.living_count(), 20);
//! ```

use ns_core::{AgentId, AgentRng, Bounds, Tuning};

use crate::NurseStore;

/// Fluent builder for [`NurseStore`].
///
/// Each nurse draws its start position and patrol velocity from its own
/// [`AgentRng`], so nurse `n` spawns in the same place for a given seed no
/// matter how many nurses follow it.
pub struct NurseStoreBuilder {
    count:         usize,
    seed:          u64,
    bounds:        Bounds,
    patrol_speed:  f64,
    countdown:     u32,
    initial_stock: u32,
}

impl NurseStoreBuilder {
    /// Create a builder for `count` nurses using `seed` as the global seed.
    pub fn new(count: usize, seed: u64) -> Self {
        let tuning = Tuning::default();
        Self {
            count,
            seed,
            bounds:        Bounds::REGION,
            patrol_speed:  tuning.patrol_speed,
            countdown:     tuning.countdown,
            initial_stock: tuning.initial_hot_chocolate,
        }
    }

    /// Spawn region (default [`Bounds::REGION`]).
    pub fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Take patrol speed, starting countdown and starting stock from `tuning`.
    pub fn tuning(mut self, tuning: &Tuning) -> Self {
        self.patrol_speed = tuning.patrol_speed;
        self.countdown = tuning.countdown;
        self.initial_stock = tuning.initial_hot_chocolate;
        self
    }

    /// Construct the store with every nurse alive, patrolling, full stock.
    pub fn build(self) -> NurseStore {
        let mut store = NurseStore::with_capacity(self.count);
        for i in 0..self.count as u32 {
            let mut rng = AgentRng::new(self.seed, AgentId(i));
            let position = rng.spawn_position(&self.bounds);
            let velocity = rng.patrol_velocity(self.patrol_speed);
            store.push(position, velocity, self.countdown, self.initial_stock);
        }
        store
    }
}
