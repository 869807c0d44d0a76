// Read model for the history list and the active countdown.

use crate::modules::cycles::core::countdown::{format_countdown, remaining_seconds};
use crate::modules::cycles::core::state::{Cycle, CycleStatus};
use crate::modules::cycles::store::CyclesStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleView {
    pub id: String,
    pub task: String,
    pub minutes_amount: u32,
    pub start_date: DateTime<Utc>,
    pub interrupted_date: Option<DateTime<Utc>>,
    pub finished_date: Option<DateTime<Utc>>,
    pub status: CycleStatus,
}

impl From<&Cycle> for CycleView {
    fn from(c: &Cycle) -> Self {
        Self {
            id: c.id.clone(),
            task: c.task.clone(),
            minutes_amount: c.minutes_amount,
            start_date: c.start_date,
            interrupted_date: c.interrupted_date,
            finished_date: c.finished_date,
            status: c.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCountdownView {
    pub cycle: Option<CycleView>,
    pub elapsed_seconds: u64,
    pub remaining_seconds: u64,
    pub countdown: String,
}

pub fn list_cycles(store: &CyclesStore) -> Vec<CycleView> {
    store.cycles().iter().map(CycleView::from).collect()
}

pub fn active_countdown(store: &CyclesStore) -> ActiveCountdownView {
    let active = store.active_cycle();
    let elapsed_seconds = if active.is_some() { store.elapsed_seconds() } else { 0 };
    let remaining = remaining_seconds(active, elapsed_seconds);
    ActiveCountdownView {
        cycle: active.map(CycleView::from),
        elapsed_seconds,
        remaining_seconds: remaining,
        countdown: format_countdown(remaining),
    }
}
