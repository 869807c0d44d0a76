// Pure decision function for interrupting the active cycle.

use crate::modules::cycles::core::decision::{DecideError, Decision};
use crate::modules::cycles::core::events::{CycleEvent, v1::cycle_interrupted::CycleInterruptedV1};
use crate::modules::cycles::core::state::CyclesState;
use crate::modules::cycles::use_cases::interrupt_cycle::command::InterruptCycle;

pub fn decide_interrupt(state: &CyclesState, command: InterruptCycle) -> Decision {
    match state.active_cycle() {
        Some(cycle) => Decision::Accepted {
            events: vec![CycleEvent::CycleInterruptedV1(CycleInterruptedV1 {
                cycle_id: cycle.id.clone(),
                interrupted_date: command.interrupted_date,
            })],
        },
        None => Decision::Rejected {
            reason: DecideError::NoActiveCycle,
        },
    }
}
