// Cycle lifecycle store: owns CyclesState and the tracked elapsed seconds.
//
// Responsibilities
// - Restore the snapshot once at construction.
// - For each command: read the clock, call the decider, fold accepted events with evolve,
//   then overwrite the snapshot.
// - Persistence is best effort. Write failures are logged and never fail a command.
//
// Ownership
// - All mutation of cycles goes through start, interrupt and mark_finished.

use crate::modules::cycles::adapters::outbound::snapshot::{load_state, save_state};
use crate::modules::cycles::core::decision::{DecideError, Decision};
use crate::modules::cycles::core::events::CycleEvent;
use crate::modules::cycles::core::evolve::evolve;
use crate::modules::cycles::core::state::{Cycle, CyclesState};
use crate::modules::cycles::use_cases::interrupt_cycle::command::InterruptCycle;
use crate::modules::cycles::use_cases::interrupt_cycle::decide::decide_interrupt;
use crate::modules::cycles::use_cases::mark_cycle_finished::command::MarkCycleFinished;
use crate::modules::cycles::use_cases::mark_cycle_finished::decide::decide_mark_finished;
use crate::modules::cycles::use_cases::start_cycle::command::StartCycle;
use crate::modules::cycles::use_cases::start_cycle::decide::decide_start;
use crate::shared::core::primitives::{Clock, whole_seconds_between};
use crate::shared::infrastructure::snapshot_store::SnapshotStore;
use std::sync::Arc;
use uuid::Uuid;

pub struct CyclesStore {
    state: CyclesState,
    elapsed_seconds: u64,
    clock: Arc<dyn Clock>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl CyclesStore {
    pub fn new(clock: Arc<dyn Clock>, snapshots: Arc<dyn SnapshotStore>) -> Self {
        let state = load_state(snapshots.as_ref());
        let elapsed_seconds = state
            .active_cycle()
            .map(|cycle| whole_seconds_between(cycle.start_date, clock.now()))
            .unwrap_or(0);
        tracing::debug!(
            cycles = state.cycles.len(),
            active_cycle_id = ?state.active_cycle_id,
            elapsed_seconds,
            "cycles store restored"
        );
        Self {
            state,
            elapsed_seconds,
            clock,
            snapshots,
        }
    }

    pub fn start(&mut self, task: impl Into<String>, minutes_amount: u32) -> Result<Cycle, DecideError> {
        let command = StartCycle {
            cycle_id: Uuid::now_v7().to_string(),
            task: task.into(),
            minutes_amount,
            start_date: self.clock.now(),
        };
        let cycle = Cycle::from(&command);
        match decide_start(&self.state, command) {
            Decision::Accepted { events } => {
                self.apply(events);
                self.elapsed_seconds = 0;
                tracing::info!(cycle_id = %cycle.id, task = %cycle.task, minutes_amount, "cycle started");
                Ok(cycle)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "start rejected");
                Err(reason)
            }
        }
    }

    pub fn interrupt(&mut self) -> Option<Cycle> {
        let command = InterruptCycle {
            interrupted_date: self.clock.now(),
        };
        let cycle = self.close(decide_interrupt(&self.state, command))?;
        tracing::info!(cycle_id = %cycle.id, "cycle interrupted");
        Some(cycle)
    }

    pub fn mark_finished(&mut self) -> Option<Cycle> {
        let command = MarkCycleFinished {
            finished_date: self.clock.now(),
        };
        let cycle = self.close(decide_mark_finished(&self.state, command))?;
        tracing::info!(cycle_id = %cycle.id, "cycle finished");
        Some(cycle)
    }

    pub fn active_cycle(&self) -> Option<&Cycle> {
        self.state.active_cycle()
    }

    pub fn active_cycle_id(&self) -> Option<&str> {
        self.state.active_cycle_id.as_deref()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn set_elapsed_seconds(&mut self, seconds: u64) {
        self.elapsed_seconds = seconds;
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.state.cycles
    }

    pub fn snapshot(&self) -> CyclesState {
        self.state.clone()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn close(&mut self, decision: Decision) -> Option<Cycle> {
        match decision {
            Decision::Accepted { events } => {
                let cycle_id = self.state.active_cycle_id.clone()?;
                self.apply(events);
                self.find(&cycle_id).cloned()
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "command ignored");
                None
            }
        }
    }

    fn apply(&mut self, events: Vec<CycleEvent>) {
        let state = std::mem::take(&mut self.state);
        self.state = events.into_iter().fold(state, evolve);
        if let Err(e) = save_state(self.snapshots.as_ref(), &self.state) {
            tracing::warn!(error = %e, "could not persist the cycles snapshot");
        }
    }

    fn find(&self, cycle_id: &str) -> Option<&Cycle> {
        self.state.cycles.iter().find(|c| c.id == cycle_id)
    }
}
