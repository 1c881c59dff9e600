//! Plain data row types written by output backends.

use ns_agent::NurseSnapshot;
use ns_behavior::CureDelivered;
use ns_core::Tick;

/// One nurse's observable state at a snapshot instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NurseSnapshotRow {
    pub tick:          u64,
    pub nurse_id:      u32,
    pub lat:           f64,
    pub lon:           f64,
    pub alive:         bool,
    pub countdown:     u32,
    pub hot_chocolate: u32,
    pub task:          &'static str,
    /// House the nurse is committed to, if any.
    pub target_house:  Option<u32>,
    pub carried_cure:  Option<&'static str>,
}

impl NurseSnapshotRow {
    pub fn new(tick: Tick, snap: &NurseSnapshot) -> Self {
        Self {
            tick:          tick.0,
            nurse_id:      snap.agent.0,
            lat:           snap.position.lat,
            lon:           snap.position.lon,
            alive:         snap.alive,
            countdown:     snap.countdown,
            hot_chocolate: snap.hot_chocolate,
            task:          snap.task.as_str(),
            target_house:  snap.task.target().map(|h| h.0),
            carried_cure:  snap.carried_cure().map(|c| c.as_str()),
        }
    }
}

/// One `cureDelivered` event.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryRow {
    pub tick:     u64,
    pub nurse_id: u32,
    pub house_id: u32,
    pub house:    String,
    /// Illness label of the house, empty for a healthy house.
    pub illness:  &'static str,
}

impl From<&CureDelivered> for DeliveryRow {
    fn from(d: &CureDelivered) -> Self {
        Self {
            tick:     d.at.0,
            nurse_id: d.agent_id.0,
            house_id: d.house.id.0,
            house:    d.house.name.clone(),
            illness:  d.house.illness.map_or("", |i| i.as_str()),
        }
    }
}

/// Population totals at a snapshot instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub tick:         u64,
    pub living:       u64,
    pub cured_houses: u64,
}
