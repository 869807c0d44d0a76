// Root event enumeration for cycles and re-exports of versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. If a breaking change is needed, add a new version and a new variant.

pub mod v1 {
    pub mod cycle_finished;
    pub mod cycle_interrupted;
    pub mod cycle_started;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CycleEvent {
    CycleStartedV1(v1::cycle_started::CycleStartedV1),
    CycleInterruptedV1(v1::cycle_interrupted::CycleInterruptedV1),
    CycleFinishedV1(v1::cycle_finished::CycleFinishedV1),
}
