// CyclesState is the canonical domain state after folding cycle events.
//
// Boundaries
// - No input or output here. Serialization shapes live in the snapshot adapter.
//
// Notes
// - `cycles` is append-only; insertion order is creation order.
// - `active_cycle_id`, when set, points at a cycle with neither terminal date.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    InProgress,
    Interrupted,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub id: String,
    pub task: String,
    pub minutes_amount: u32,
    pub start_date: DateTime<Utc>,
    pub interrupted_date: Option<DateTime<Utc>>,
    pub finished_date: Option<DateTime<Utc>>,
}

impl Cycle {
    pub fn status(&self) -> CycleStatus {
        match (self.interrupted_date, self.finished_date) {
            (Some(_), _) => CycleStatus::Interrupted,
            (None, Some(_)) => CycleStatus::Finished,
            (None, None) => CycleStatus::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status() != CycleStatus::InProgress
    }

    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes_amount) * 60
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CyclesState {
    pub cycles: Vec<Cycle>,
    pub active_cycle_id: Option<String>,
}

impl CyclesState {
    pub fn active_cycle(&self) -> Option<&Cycle> {
        let active_id = self.active_cycle_id.as_deref()?;
        self.cycles.iter().find(|cycle| cycle.id == active_id)
    }

    /// Drops an active id that does not reference an in-progress cycle.
    pub fn repaired(mut self) -> Self {
        let dangling = match self.active_cycle() {
            Some(cycle) => cycle.is_terminal(),
            None => self.active_cycle_id.is_some(),
        };
        if dangling {
            self.active_cycle_id = None;
        }
        self
    }
}

#[cfg(test)]
mod cycles_state_tests {
    use super::*;
    use crate::tests::fixtures::{cycle_in_progress, fixed_start_date};
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_blank_state() {
        let state = CyclesState::default();
        assert!(state.cycles.is_empty());
        assert_eq!(state.active_cycle_id, None);
        assert_eq!(state.active_cycle(), None);
    }

    #[rstest]
    fn it_should_resolve_the_active_cycle() {
        let cycle = cycle_in_progress("cycle-0001");
        let state = CyclesState {
            cycles: vec![cycle.clone()],
            active_cycle_id: Some("cycle-0001".to_string()),
        };
        assert_eq!(state.active_cycle(), Some(&cycle));
    }

    #[rstest]
    fn it_should_derive_the_status_from_the_terminal_dates() {
        let mut cycle = cycle_in_progress("cycle-0001");
        assert_eq!(cycle.status(), CycleStatus::InProgress);
        assert!(!cycle.is_terminal());

        cycle.finished_date = Some(fixed_start_date());
        assert_eq!(cycle.status(), CycleStatus::Finished);

        cycle.finished_date = None;
        cycle.interrupted_date = Some(fixed_start_date());
        assert_eq!(cycle.status(), CycleStatus::Interrupted);
        assert!(cycle.is_terminal());
    }

    #[rstest]
    fn it_should_clear_an_active_id_pointing_at_a_terminal_cycle() {
        let mut cycle = cycle_in_progress("cycle-0001");
        cycle.interrupted_date = Some(fixed_start_date());
        let state = CyclesState {
            cycles: vec![cycle],
            active_cycle_id: Some("cycle-0001".to_string()),
        }
        .repaired();
        assert_eq!(state.active_cycle_id, None);
        assert_eq!(state.cycles.len(), 1);
    }

    #[rstest]
    fn it_should_clear_an_active_id_pointing_nowhere() {
        let state = CyclesState {
            cycles: vec![],
            active_cycle_id: Some("ghost".to_string()),
        }
        .repaired();
        assert_eq!(state.active_cycle_id, None);
    }

    #[rstest]
    fn it_should_keep_a_valid_active_id() {
        let state = CyclesState {
            cycles: vec![cycle_in_progress("cycle-0001")],
            active_cycle_id: Some("cycle-0001".to_string()),
        }
        .repaired();
        assert_eq!(state.active_cycle_id.as_deref(), Some("cycle-0001"));
    }
}
