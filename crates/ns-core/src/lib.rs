//! `ns-core` — foundational types for the nurse patrol simulation.
//!
//! This crate is a dependency of every other `ns-*` crate.  It has no `ns-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `HospitalId`, `HouseId`                    |
//! | [`geo`]         | `Position`, `Velocity`, `Bounds`, proximity helpers   |
//! | [`illness`]     | `Illness` and `Cure` enums                            |
//! | [`time`]        | `Tick` (simulated milliseconds), `SimClock`           |
//! | [`config`]      | `SimConfig`, `Tuning`                                 |
//! | [`rng`]         | `AgentRng` (per-nurse), `SimRng` (global)             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod illness;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, Tuning};
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, DEFAULT_PROXIMITY, Position, Velocity};
pub use ids::{AgentId, HospitalId, HouseId};
pub use illness::{Cure, Illness};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
