// Event payload: CycleInterruptedV1.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct CycleInterruptedV1 {
    pub cycle_id: String,
    pub interrupted_date: DateTime<Utc>,
}
