//! `ns-gateway` — live fan-out of simulation events to observers.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`envelope`]  | `Envelope` (`{"event", "data"}` JSON), `Greeting`            |
//! | [`gateway`]   | `Gateway` (broadcast sender + registry), `Connection`        |
//! | [`observer`]  | `GatewayObserver`: `SimObserver` → `Gateway` bridge          |
//! | [`report`]    | `LocationReport`, `ReportedLocation`, `ReportRegistry`       |
//! | [`error`]     | `ReportError` (HTTP 400), `ReportResult<T>`                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! let gateway = Gateway::new();
//! let mut conn = gateway.connect(&sim.world);
//! for env in conn.greeting.envelopes() {
//!     socket.send(env.to_json()?).await?;
//! }
//! let mut obs = GatewayObserver::new(gateway.clone());
//! sim.run(&mut obs);
//! ```
//!
//! The simulation never waits on observers: a slow observer lags and skips
//! ahead, and publishing with nobody connected is a no-op.

pub mod envelope;
pub mod error;
pub mod gateway;
pub mod observer;
pub mod report;

#[cfg(test)]
mod tests;

pub use envelope::{Envelope, Greeting};
pub use error::{ReportError, ReportResult};
pub use gateway::{BROADCAST_CAPACITY, Connection, Gateway};
pub use observer::GatewayObserver;
pub use report::{LocationReport, ReportRegistry, ReportedLocation};
