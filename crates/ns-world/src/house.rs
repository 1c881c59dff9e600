//! Demand points.

use ns_core::{HouseId, Illness, Position};

/// A stationary demand point, optionally afflicted with an illness.
///
/// `cured` is private: it starts `false` and can only be flipped to `true`
/// through [`House::mark_cured`] (normally via
/// [`WorldState::mark_cured`][crate::WorldState::mark_cured]).  There is no
/// way back.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct House {
    pub id:       HouseId,
    pub name:     String,
    pub location: Position,
    /// `None` means the house has no demand and never receives a delivery.
    pub illness:  Option<Illness>,
    cured:        bool,
}

impl House {
    pub fn new(id: HouseId, location: Position, illness: Option<Illness>) -> Self {
        Self {
            id,
            name: format!("House {}", id.0),
            location,
            illness,
            cured: false,
        }
    }

    #[inline]
    pub fn is_cured(&self) -> bool {
        self.cured
    }

    /// Set the terminal `cured` flag.
    ///
    /// Returns `true` if this call performed the `false → true` transition
    /// and `false` if the house was already cured.
    pub(crate) fn mark_cured(&mut self) -> bool {
        !std::mem::replace(&mut self.cured, true)
    }
}
