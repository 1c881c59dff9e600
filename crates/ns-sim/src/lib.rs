//! `ns-sim` — cooperative job-queue driver for the nurse patrol simulation.
//!
//! # Job loop
//!
//! ```text
//! while next job tick < until:
//!   ① Snapshots  emit any snapshot due at or before that tick.
//!   ② Pop        drain every job due at that tick from the JobQueue.
//!   ③ Run        Movement → NurseBehavior::movement_tick
//!                Survival → NurseBehavior::survival_tick
//!   ④ Requeue    push the job one period later if the nurse is alive.
//! ```
//!
//! Everything runs on the caller's thread; the world and the nurse store are
//! plain `&mut` borrows handed to one job at a time.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ns_behavior::NurseController;
//! use ns_core::SimConfig;
//! use ns_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let mut sim = SimBuilder::new(config.clone(), NurseController::new(config.tuning))
//!     .build()?;
//! let stats = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod schedule;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use schedule::{Job, JobKind, JobQueue};
pub use sim::Sim;
pub use stats::SimStats;
