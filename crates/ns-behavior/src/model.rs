//! The `NurseBehavior` trait — the extension point driven by `ns-sim`.

use ns_core::AgentId;

use crate::{EventSink, TickContext};

/// Pluggable nurse behavior.
///
/// The driver calls [`movement_tick`](Self::movement_tick) every movement
/// period and [`survival_tick`](Self::survival_tick) every survival period,
/// independently, for every nurse.  Implementations must tolerate either
/// order within the same window.
///
/// # Example
///
/// ```rust,ignore
/// struct Statue;
///
/// impl NurseBehavior for Statue {
///     fn movement_tick(&self, agent: AgentId, ctx: &mut TickContext<'_>, sink: &mut dyn EventSink) {
///         sink.location_update(&ctx.nurses.snapshot(agent).into());
///     }
///     fn survival_tick(&self, _: AgentId, _: &mut TickContext<'_>, _: &mut dyn EventSink) {}
/// }
/// ```
pub trait NurseBehavior {
    /// Decide and apply one movement step for `agent`.
    fn movement_tick(
        &self,
        agent: AgentId,
        ctx:   &mut TickContext<'_>,
        sink:  &mut dyn EventSink,
    );

    /// Advance `agent`'s survival countdown by one step.
    fn survival_tick(
        &self,
        agent: AgentId,
        ctx:   &mut TickContext<'_>,
        sink:  &mut dyn EventSink,
    );
}
