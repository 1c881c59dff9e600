//! `ns-world` — the shared registry of supply and demand points.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`hospital`]   | `Hospital`: immutable supply point                         |
//! | [`house`]      | `House`: demand point with a one-way `cured` flag          |
//! | [`catalog`]    | `CureCatalog`: illness → cure table fixed at startup       |
//! | [`world`]      | `WorldState`: owns all of the above, funnels mutation      |
//! | [`resolver`]   | `nearest_hospital`, `is_eligible_house`                    |
//! | [`generate`]   | `generate_world`: random placement from a `SimRng`         |
//! | [`error`]      | `WorldError`, `WorldResult<T>`                             |
//!
//! # Mutation discipline
//!
//! After generation the only write the simulation performs on the world is
//! [`WorldState::mark_cured`].  Hospitals and the catalog are read-only and
//! no entity is ever added or removed.

pub mod catalog;
pub mod error;
pub mod generate;
pub mod hospital;
pub mod house;
pub mod resolver;
pub mod world;

#[cfg(test)]
mod tests;

pub use catalog::CureCatalog;
pub use error::{WorldError, WorldResult};
pub use generate::generate_world;
pub use hospital::Hospital;
pub use house::House;
pub use resolver::{is_eligible_house, nearest_hospital};
pub use world::WorldState;
