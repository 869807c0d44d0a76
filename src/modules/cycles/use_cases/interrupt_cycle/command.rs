use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterruptCycle {
    pub interrupted_date: DateTime<Utc>,
}
