//! Supply points.

use ns_core::{HospitalId, Position};

/// A stationary supply point where nurses resupply and pick up cures.
///
/// Immutable after world generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hospital {
    pub id:       HospitalId,
    pub name:     String,
    pub location: Position,
}

impl Hospital {
    pub fn new(id: HospitalId, location: Position) -> Self {
        Self {
            id,
            name: format!("Hospital {}", id.0),
            location,
        }
    }
}
