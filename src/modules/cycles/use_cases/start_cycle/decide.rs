// Pure decision function for starting a cycle.
//
// Responsibilities
// - Reject the command while another cycle is active.
// - Otherwise emit CycleStartedV1. Input validation belongs to the form, not here.
// - Never perform input or output.

use crate::modules::cycles::core::decision::{DecideError, Decision};
use crate::modules::cycles::core::events::{CycleEvent, v1::cycle_started::CycleStartedV1};
use crate::modules::cycles::core::state::CyclesState;
use crate::modules::cycles::use_cases::start_cycle::command::StartCycle;

pub fn decide_start(state: &CyclesState, command: StartCycle) -> Decision {
    if state.active_cycle_id.is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyActive,
        };
    }
    Decision::Accepted {
        events: vec![CycleEvent::CycleStartedV1(CycleStartedV1 {
            cycle_id: command.cycle_id,
            task: command.task,
            minutes_amount: command.minutes_amount,
            start_date: command.start_date,
        })],
    }
}

#[cfg(test)]
mod start_cycle_decide_tests {
    use super::*;
    use crate::modules::cycles::core::evolve::evolve;
    use crate::tests::fixtures::StartCycleBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn start_command() -> StartCycle {
        StartCycleBuilder::new().build()
    }

    #[rstest]
    fn it_should_decide_to_start_the_cycle(start_command: StartCycle) {
        let decision = decide_start(&CyclesState::default(), start_command.clone());
        assert_eq!(
            decision,
            Decision::Accepted {
                events: vec![CycleEvent::CycleStartedV1(CycleStartedV1 {
                    cycle_id: start_command.cycle_id,
                    task: start_command.task,
                    minutes_amount: start_command.minutes_amount,
                    start_date: start_command.start_date,
                })]
            }
        );
    }

    #[rstest]
    fn it_should_decide_that_a_cycle_is_already_active(start_command: StartCycle) {
        let Decision::Accepted { events } = decide_start(&CyclesState::default(), start_command) else {
            panic!("expected the first start to be accepted");
        };
        let state = events.into_iter().fold(CyclesState::default(), evolve);
        let second = StartCycleBuilder::new().cycle_id("cycle-fixed-0002").build();
        assert_eq!(
            decide_start(&state, second),
            Decision::Rejected {
                reason: DecideError::AlreadyActive
            }
        );
    }
}
