//! `ns-agent` — Structure-of-Arrays nurse storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`task`]      | `Task`: explicit per-nurse state machine                   |
//! | [`store`]     | `NurseStore` (SoA arrays), `NurseSnapshot`                 |
//! | [`builder`]   | `NurseStoreBuilder` (random spawn)                         |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                    |
//! |----------|-----------------------------------------------------------|
//! | `serde`  | Derives `Serialize`/`Deserialize` on snapshot types.      |

pub mod builder;
pub mod store;
pub mod task;


pub use builder::NurseStoreBuilder;
pub use store::{NurseSnapshot, NurseStore};
pub use task::Task;
