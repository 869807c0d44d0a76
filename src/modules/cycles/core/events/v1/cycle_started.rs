// Event payload: CycleStartedV1.
//
// Records that a new cycle was created and became the active one.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CycleStartedV1 {
    pub cycle_id: String,
    pub task: String,
    pub minutes_amount: u32,
    pub start_date: DateTime<Utc>,
}
