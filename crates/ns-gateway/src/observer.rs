//! `GatewayObserver` — bridges simulation events into the gateway channel.

use ns_behavior::{CureDelivered, EventSink, LocationUpdate};
use ns_core::Tick;
use ns_sim::{SimObserver, SimStats};
use tracing::info;

use crate::{Envelope, Gateway};

/// A [`SimObserver`] that publishes every event to a [`Gateway`].
///
/// Publishing never blocks and never fails; with no observers connected
/// the events are simply dropped.
pub struct GatewayObserver {
    gateway: Gateway,
}

impl GatewayObserver {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

impl EventSink for GatewayObserver {
    fn location_update(&mut self, update: &LocationUpdate) {
        self.gateway.publish(Envelope::LocationUpdate(*update));
    }

    fn cure_delivered(&mut self, delivery: &CureDelivered) {
        self.gateway.publish(Envelope::CureDelivered(delivery.clone()));
    }
}

impl SimObserver for GatewayObserver {
    fn on_sim_end(&mut self, now: Tick, stats: &SimStats) {
        info!(
            now       = %now,
            observers = self.gateway.observer_count(),
            cured     = stats.cured_houses,
            "gateway stream finished"
        );
    }
}
