use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkCycleFinished {
    pub finished_date: DateTime<Utc>,
}
