//! `ns-behavior` — nurse decision logic and the events it emits.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`event`]       | `LocationUpdate`, `CureDelivered`, `SimEvent`              |
//! | [`sink`]        | `EventSink` trait, `NoopSink`                              |
//! | [`context`]     | `TickContext<'a>`: mutable state for one job               |
//! | [`model`]       | `NurseBehavior` trait                                      |
//! | [`controller`]  | `NurseController`: the standard movement state machine     |
//! | [`survival`]    | `survival_step`, `SurvivalOutcome`                         |
//! | [`noop`]        | `NoopBehavior`: ignores every tick                         |
//!
//! # Design notes
//!
//! Behavior callbacks mutate state directly through [`TickContext`] and
//! report what happened through an [`EventSink`].  The driver in `ns-sim`
//! runs one job at a time, so a callback always sees the effects of every
//! job that ran before it, including other nurses' deliveries.
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                    |
//! |----------|-----------------------------------------------------------|
//! | `serde`  | Derives `Serialize`/`Deserialize` on event types.         |

pub mod context;
pub mod controller;
pub mod event;
pub mod model;
pub mod noop;
pub mod sink;
pub mod survival;


pub use context::TickContext;
pub use controller::NurseController;
pub use event::{CureDelivered, LocationUpdate, SimEvent};
pub use model::NurseBehavior;
pub use noop::NoopBehavior;
pub use sink::{EventSink, NoopSink};
pub use survival::{survival_step, SurvivalOutcome};
