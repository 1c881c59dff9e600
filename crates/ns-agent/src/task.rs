//! What a nurse is currently trying to do.

use ns_core::{Cure, HouseId};

/// A nurse's task, as an explicit state machine.
///
/// Each variant carries only the data relevant to it, so combinations like
/// "carrying a cure with no destination" cannot be represented.
///
/// ```text
///              hot_chocolate < 1                    arrive at hospital
///   Patrol ───────────────────────► Resupplying ──────────────────────► Patrol
///     │
///     │ near eligible house          arrive at hospital
///     └───────────────────────► FetchingCure ──────────────────────► Delivering
///                                                                        │
///   Patrol ◄─────────────────────────────────────────────────────────────┘
///                    arrive at house (or any matching house en route)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    /// Wandering with the patrol velocity.
    #[default]
    Patrol,

    /// Out of hot chocolate, heading to the nearest hospital.
    Resupplying,

    /// Committed to `house`; heading to the nearest hospital for its cure.
    FetchingCure { house: HouseId },

    /// Carrying `cure` to `house`.
    Delivering { house: HouseId, cure: Cure },
}

impl Task {
    /// The committed house, if any.
    #[inline]
    pub fn target(self) -> Option<HouseId> {
        match self {
            Task::FetchingCure { house } | Task::Delivering { house, .. } => Some(house),
            Task::Patrol | Task::Resupplying => None,
        }
    }

    /// The cure in hand, if any.
    #[inline]
    pub fn carried_cure(self) -> Option<Cure> {
        match self {
            Task::Delivering { cure, .. } => Some(cure),
            _ => None,
        }
    }

    /// `true` while the nurse is on its way to pick up a cure.
    #[inline]
    pub fn is_heading_to_supply(self) -> bool {
        matches!(self, Task::FetchingCure { .. })
    }

    /// Short label for CSV columns and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Patrol              => "patrol",
            Task::Resupplying         => "resupplying",
            Task::FetchingCure { .. } => "fetching_cure",
            Task::Delivering { .. }   => "delivering",
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
