// Snapshot mapping for the cycles state.
//
// Purpose
// - Define the persisted layout `{ cycles, activeCycleId }` and map it to and from CyclesState.
// - Restore tolerantly: a missing, unreadable or malformed snapshot yields an empty state.

use crate::modules::cycles::core::state::{Cycle, CyclesState};
use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CYCLES_STATE_KEY: &str = "pomodoro:cycles-state-v1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRecord {
    pub id: String,
    pub task: String,
    pub minutes_amount: u32,
    pub start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrupted_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclesSnapshot {
    pub cycles: Vec<CycleRecord>,
    #[serde(default)]
    pub active_cycle_id: Option<String>,
}

impl From<&Cycle> for CycleRecord {
    fn from(c: &Cycle) -> Self {
        Self {
            id: c.id.clone(),
            task: c.task.clone(),
            minutes_amount: c.minutes_amount,
            start_date: c.start_date,
            interrupted_date: c.interrupted_date,
            finished_date: c.finished_date,
        }
    }
}

impl From<CycleRecord> for Cycle {
    fn from(r: CycleRecord) -> Self {
        Self {
            id: r.id,
            task: r.task,
            minutes_amount: r.minutes_amount,
            start_date: r.start_date,
            interrupted_date: r.interrupted_date,
            // a record carrying both dates keeps the one written first
            finished_date: r.finished_date.filter(|_| r.interrupted_date.is_none()),
        }
    }
}

impl From<&CyclesState> for CyclesSnapshot {
    fn from(state: &CyclesState) -> Self {
        Self {
            cycles: state.cycles.iter().map(CycleRecord::from).collect(),
            active_cycle_id: state.active_cycle_id.clone(),
        }
    }
}

impl From<CyclesSnapshot> for CyclesState {
    fn from(snapshot: CyclesSnapshot) -> Self {
        CyclesState {
            cycles: snapshot.cycles.into_iter().map(Cycle::from).collect(),
            active_cycle_id: snapshot.active_cycle_id,
        }
        .repaired()
    }
}

pub fn save_state(store: &dyn SnapshotStore, state: &CyclesState) -> Result<(), SnapshotStoreError> {
    let contents = serde_json::to_string(&CyclesSnapshot::from(state))?;
    store.write(CYCLES_STATE_KEY, &contents)
}

pub fn load_state(store: &dyn SnapshotStore) -> CyclesState {
    let contents = match store.read(CYCLES_STATE_KEY) {
        Ok(Some(contents)) => contents,
        Ok(None) => return CyclesState::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read the cycles snapshot, starting empty");
            return CyclesState::default();
        }
    };
    match serde_json::from_str::<CyclesSnapshot>(&contents) {
        Ok(snapshot) => snapshot.into(),
        Err(e) => {
            tracing::warn!(error = %e, "cycles snapshot is malformed, starting empty");
            CyclesState::default()
        }
    }
}
