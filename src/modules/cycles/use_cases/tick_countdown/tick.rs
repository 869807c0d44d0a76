// Pure tick decision for the countdown.
//
// Responsibilities
// - Compare the cycle captured when the ticker was registered with the store's current active id.
// - Derive whole elapsed seconds since the cycle started and compare them with the committed total.
// - Never perform input or output.

use crate::modules::cycles::core::state::Cycle;
use crate::modules::cycles::store::CyclesStore;
use crate::shared::core::primitives::whole_seconds_between;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Stale,
    Elapsed(u64),
    Finished { total_seconds: u64 },
}

pub fn decide_tick(captured: &Cycle, active_cycle_id: Option<&str>, now: DateTime<Utc>) -> TickOutcome {
    if active_cycle_id != Some(captured.id.as_str()) {
        return TickOutcome::Stale;
    }
    let elapsed = whole_seconds_between(captured.start_date, now);
    let total_seconds = captured.total_seconds();
    if elapsed >= total_seconds {
        TickOutcome::Finished { total_seconds }
    } else {
        TickOutcome::Elapsed(elapsed)
    }
}

/// Runs one tick against the store: exactly one of set_elapsed_seconds or mark_finished, or nothing when stale.
pub fn apply_tick(store: &mut CyclesStore, captured: &Cycle) -> TickOutcome {
    let outcome = decide_tick(captured, store.active_cycle_id(), store.clock().now());
    match outcome {
        TickOutcome::Elapsed(seconds) => store.set_elapsed_seconds(seconds),
        TickOutcome::Finished { .. } => {
            store.mark_finished();
        }
        TickOutcome::Stale => {
            tracing::debug!(cycle_id = %captured.id, "stale tick discarded");
        }
    }
    outcome
}
