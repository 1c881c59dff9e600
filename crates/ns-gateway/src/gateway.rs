//! The `Gateway` — broadcast fan-out plus the inbound report registry.

use std::sync::Arc;

use ns_world::WorldState;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, warn};

use crate::{Envelope, Greeting, LocationReport, ReportRegistry, ReportResult, ReportedLocation};

/// Capacity of the broadcast channel.
///
/// A subscriber that falls behind by more than this many messages skips to
/// the oldest retained one.  With 20 nurses on a 10 ms tick this is a few
/// hundred milliseconds of updates.
pub const BROADCAST_CAPACITY: usize = 1024;

/// Shared handle to the observer channel.
///
/// Cheap to clone; every clone publishes into the same channel and updates
/// the same [`ReportRegistry`].
#[derive(Clone)]
pub struct Gateway {
    tx:      broadcast::Sender<Envelope>,
    reports: Arc<RwLock<ReportRegistry>>,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway {
    pub fn new() -> Self {
        Self::with_capacity(BROADCAST_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            reports: Arc::new(RwLock::new(ReportRegistry::new())),
        }
    }

    /// Attach a new observer: snapshot the world for its greeting and
    /// subscribe it to everything published from now on.
    pub fn connect(&self, world: &WorldState) -> Connection {
        let rx = self.tx.subscribe();
        debug!(observers = self.tx.receiver_count(), "observer connected");
        Connection { greeting: Greeting::from_world(world), rx }
    }

    /// Publish to all connected observers.
    ///
    /// Returns the number of receivers that got the message.  Returns 0 if
    /// nobody is connected (this is not an error).
    pub fn publish(&self, envelope: Envelope) -> usize {
        self.tx.send(envelope).unwrap_or(0)
    }

    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }

    // ── Inbound reports ───────────────────────────────────────────────────

    /// Record a validated report and re-emit it as a `locationUpdate`.
    pub async fn report_location(&self, report: LocationReport) -> ReportedLocation {
        let previous = self.reports.write().await.update(&report);
        debug!(agent = %report.agent_id, replaced = previous.is_some(), "location reported");

        let reported = ReportedLocation::from(&report);
        self.publish(Envelope::ReportedLocation(reported.clone()));
        reported
    }

    /// Parse and apply a raw JSON report body.
    ///
    /// On error nothing is recorded or published; map the error to a
    /// response with [`ReportError::status_code`][crate::ReportError::status_code].
    pub async fn handle_report(&self, body: &str) -> ReportResult<ReportedLocation> {
        let report = LocationReport::from_json(body).inspect_err(|e| {
            warn!(error = %e, "rejected location report");
        })?;
        Ok(self.report_location(report).await)
    }

    /// Read access to the registry of reported positions.
    pub async fn reports(&self) -> tokio::sync::RwLockReadGuard<'_, ReportRegistry> {
        self.reports.read().await
    }
}

// ── Connection ────────────────────────────────────────────────────────────────

/// One observer's view: the greeting plus its live receiver.
pub struct Connection {
    pub greeting: Greeting,
    rx:           broadcast::Receiver<Envelope>,
}

impl Connection {
    /// Next live envelope.
    ///
    /// Lagging skips ahead with a warning; returns `None` once every
    /// [`Gateway`] handle has been dropped.
    pub async fn recv(&mut self) -> Option<Envelope> {
        loop {
            match self.rx.recv().await {
                Ok(envelope) => return Some(envelope),
                Err(RecvError::Lagged(n)) => {
                    warn!(skipped = n, "observer lagged, skipping messages");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking variant of [`recv`](Self::recv); `None` when nothing is
    /// queued right now.
    pub fn try_recv(&mut self) -> Option<Envelope> {
        use tokio::sync::broadcast::error::TryRecvError;
        loop {
            match self.rx.try_recv() {
                Ok(envelope) => return Some(envelope),
                Err(TryRecvError::Lagged(n)) => {
                    warn!(skipped = n, "observer lagged, skipping messages");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
