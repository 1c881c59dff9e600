//! The `EventSink` trait — where emitted events go.

use crate::{CureDelivered, LocationUpdate, SimEvent};

/// Receives events as the controller and survival scheduler produce them.
///
/// Delivery is fire-and-forget: sinks cannot fail or push back, and the
/// simulation never waits on them.  Both methods default to no-ops so
/// implementors only override what they care about.
pub trait EventSink {
    fn location_update(&mut self, _update: &LocationUpdate) {}

    fn cure_delivered(&mut self, _delivery: &CureDelivered) {}
}

/// An [`EventSink`] that drops everything.
pub struct NoopSink;

impl EventSink for NoopSink {}

/// Record every event in arrival order.  Handy in tests.
impl EventSink for Vec<SimEvent> {
    fn location_update(&mut self, update: &LocationUpdate) {
        self.push(SimEvent::LocationUpdate(*update));
    }

    fn cure_delivered(&mut self, delivery: &CureDelivered) {
        self.push(SimEvent::CureDelivered(delivery.clone()));
    }
}
