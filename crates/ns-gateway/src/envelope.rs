//! Wire envelopes: `{"event": <name>, "data": <payload>}`.

use ns_behavior::{CureDelivered, LocationUpdate};
use ns_world::{Hospital, House, WorldState};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::ReportedLocation;

/// One message on the observer channel.
///
/// A simulated nurse and an external report share the `locationUpdate`
/// event name; their payloads differ.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Hospitals(Vec<Hospital>),
    Houses(Vec<House>),
    LocationUpdate(LocationUpdate),
    ReportedLocation(ReportedLocation),
    CureDelivered(CureDelivered),
}

impl Envelope {
    /// The `event` name sent on the wire.
    pub fn event(&self) -> &'static str {
        match self {
            Self::Hospitals(_) => "hospitals",
            Self::Houses(_) => "houses",
            Self::LocationUpdate(_) | Self::ReportedLocation(_) => "locationUpdate",
            Self::CureDelivered(_) => "cureDelivered",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Envelope", 2)?;
        st.serialize_field("event", self.event())?;
        match self {
            Self::Hospitals(h) => st.serialize_field("data", h)?,
            Self::Houses(h) => st.serialize_field("data", h)?,
            Self::LocationUpdate(u) => st.serialize_field("data", u)?,
            Self::ReportedLocation(r) => st.serialize_field("data", r)?,
            Self::CureDelivered(d) => st.serialize_field("data", d)?,
        }
        st.end()
    }
}

// ── Greeting ──────────────────────────────────────────────────────────────────

/// What a newly connected observer receives before the live stream.
///
/// House snapshots include the current `cured` flag, so a late observer
/// sees deliveries that happened before it connected.
#[derive(Debug, Clone, PartialEq)]
pub struct Greeting {
    pub hospitals: Vec<Hospital>,
    pub houses:    Vec<House>,
}

impl Greeting {
    pub fn from_world(world: &WorldState) -> Self {
        Self {
            hospitals: world.hospitals().to_vec(),
            houses:    world.houses().to_vec(),
        }
    }

    /// The greeting as the two envelopes sent on connect, hospitals first.
    pub fn envelopes(&self) -> [Envelope; 2] {
        [
            Envelope::Hospitals(self.hospitals.clone()),
            Envelope::Houses(self.houses.clone()),
        ]
    }
}
