//! Events emitted by the nurse controller and survival scheduler.

use ns_agent::NurseSnapshot;
use ns_core::{AgentId, Cure, Tick};
use ns_world::House;

/// Full observable state of one nurse.
///
/// Emitted every movement tick for every living nurse, and once more when a
/// nurse dies.  It is a state broadcast, not a delta: consecutive updates
/// may be identical.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocationUpdate {
    /// Serialized as `Nurse n`, matching the greeting's naming.
    #[cfg_attr(feature = "serde", serde(with = "ns_core::ids::nurse_label"))]
    pub agent_id:      AgentId,
    pub lat:           f64,
    pub lon:           f64,
    pub alive:         bool,
    pub countdown:     u32,
    #[cfg_attr(feature = "serde", serde(rename = "resource"))]
    pub hot_chocolate: u32,
    pub carried_cure:  Option<Cure>,
}

impl From<NurseSnapshot> for LocationUpdate {
    fn from(snap: NurseSnapshot) -> Self {
        Self {
            agent_id:      snap.agent,
            lat:           snap.position.lat,
            lon:           snap.position.lon,
            alive:         snap.alive,
            countdown:     snap.countdown,
            hot_chocolate: snap.hot_chocolate,
            carried_cure:  snap.carried_cure(),
        }
    }
}

/// A cure reached a house.
///
/// `house` is the state right after the delivery (so `is_cured()` is
/// `true`).  Two nurses delivering to the same house both emit one of these.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CureDelivered {
    #[cfg_attr(feature = "serde", serde(with = "ns_core::ids::nurse_label"))]
    pub agent_id: AgentId,
    pub house:    House,
    /// Simulated instant of the delivery.  Not part of the wire format.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub at:       Tick,
}

/// Either event, for sinks that record a single ordered stream.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    LocationUpdate(LocationUpdate),
    CureDelivered(CureDelivered),
}
