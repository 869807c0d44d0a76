// Command data type for starting a cycle.
//
// Carries input already accepted by the form, plus the id and start date chosen by the store.

use crate::modules::cycles::core::state::Cycle;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCycle {
    pub cycle_id: String,
    pub task: String,
    pub minutes_amount: u32,
    pub start_date: DateTime<Utc>,
}

impl From<&StartCycle> for Cycle {
    fn from(command: &StartCycle) -> Self {
        Self {
            id: command.cycle_id.clone(),
            task: command.task.clone(),
            minutes_amount: command.minutes_amount,
            start_date: command.start_date,
            interrupted_date: None,
            finished_date: None,
        }
    }
}
