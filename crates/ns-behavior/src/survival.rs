//! Survival countdown: the slow clock that consumes hot chocolate.

use ns_agent::NurseStore;
use ns_core::AgentId;
use tracing::{info, trace};

use crate::{EventSink, LocationUpdate};

/// What a single survival step did to a nurse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurvivalOutcome {
    /// The nurse was already dead; nothing changed.
    Skipped,
    /// Countdown went down by one.
    Ticked,
    /// Countdown hit zero and a hot chocolate reset it.
    Consumed,
    /// Countdown hit zero with no stock left.  Terminal.
    Died,
}

/// Run one survival step for `agent`.
///
/// The countdown is decremented first (never below zero).  If it is then at
/// zero the nurse drinks a hot chocolate and the countdown resets to
/// `countdown_reset`, or, with an empty stock, the nurse dies and a final
/// [`LocationUpdate`] with `alive = false` is emitted.
pub fn survival_step(
    agent:           AgentId,
    nurses:          &mut NurseStore,
    countdown_reset: u32,
    sink:            &mut dyn EventSink,
) -> SurvivalOutcome {
    let i = agent.index();
    if !nurses.alive[i] {
        return SurvivalOutcome::Skipped;
    }

    if nurses.countdown[i] > 0 {
        nurses.countdown[i] -= 1;
    }
    if nurses.countdown[i] > 0 {
        return SurvivalOutcome::Ticked;
    }

    if nurses.hot_chocolate[i] > 0 {
        nurses.hot_chocolate[i] -= 1;
        nurses.countdown[i] = countdown_reset;
        trace!(agent = %agent, left = nurses.hot_chocolate[i], "drank hot chocolate");
        SurvivalOutcome::Consumed
    } else {
        nurses.alive[i] = false;
        info!(agent = %agent, "nurse froze");
        sink.location_update(&LocationUpdate::from(nurses.snapshot(agent)));
        SurvivalOutcome::Died
    }
}
