// Event payload: CycleFinishedV1.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CycleFinishedV1 {
    pub cycle_id: String,
    pub finished_date: DateTime<Utc>,
}
