// Pure decision function for finishing the active cycle.
//
// The ticker decides when the committed duration has elapsed; this only checks that a cycle is active.

use crate::modules::cycles::core::decision::{DecideError, Decision};
use crate::modules::cycles::core::events::{CycleEvent, v1::cycle_finished::CycleFinishedV1};
use crate::modules::cycles::core::state::CyclesState;
use crate::modules::cycles::use_cases::mark_cycle_finished::command::MarkCycleFinished;

pub fn decide_mark_finished(state: &CyclesState, command: MarkCycleFinished) -> Decision {
    match state.active_cycle() {
        Some(cycle) => Decision::Accepted {
            events: vec![CycleEvent::CycleFinishedV1(CycleFinishedV1 {
                cycle_id: cycle.id.clone(),
                finished_date: command.finished_date,
            })],
        },
        None => Decision::Rejected {
            reason: DecideError::NoActiveCycle,
        },
    }
}

#[cfg(test)]
mod mark_cycle_finished_decide_tests {
    use super::*;
    use crate::modules::cycles::core::evolve::evolve;
    use crate::tests::fixtures::{cycle_in_progress, fixed_start_date};
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn it_should_decide_to_finish_the_active_cycle() {
        let state = CyclesState {
            cycles: vec![cycle_in_progress("cycle-0001")],
            active_cycle_id: Some("cycle-0001".to_string()),
        };
        let at = fixed_start_date() + Duration::minutes(25);
        let Decision::Accepted { events } = decide_mark_finished(&state, MarkCycleFinished { finished_date: at }) else {
            panic!("expected the finish to be accepted");
        };
        let next = events.into_iter().fold(state, evolve);
        assert_eq!(next.active_cycle_id, None);
        assert_eq!(next.cycles[0].finished_date, Some(at));
    }

    #[rstest]
    fn it_should_decide_that_there_is_no_active_cycle() {
        let decision = decide_mark_finished(
            &CyclesState::default(),
            MarkCycleFinished {
                finished_date: fixed_start_date(),
            },
        );
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: DecideError::NoActiveCycle
            }
        );
    }
}
