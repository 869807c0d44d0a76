use crate::modules::cycles::core::events::CycleEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum DecideError {
    #[error("a cycle is already active")]
    AlreadyActive,

    #[error("no active cycle")]
    NoActiveCycle,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<CycleEvent> },
    Rejected { reason: DecideError },
}
