//! A no-op behavior model — nurses never move, age, or emit.

use ns_core::AgentId;

use crate::{EventSink, NurseBehavior, TickContext};

/// A [`NurseBehavior`] that ignores every tick.
///
/// Useful as a placeholder in scheduler tests.
pub struct NoopBehavior;

impl NurseBehavior for NoopBehavior {
    fn movement_tick(&self, _: AgentId, _: &mut TickContext<'_>, _: &mut dyn EventSink) {}

    fn survival_tick(&self, _: AgentId, _: &mut TickContext<'_>, _: &mut dyn EventSink) {}
}
