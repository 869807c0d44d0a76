use crate::modules::cycles::core::events::CycleEvent;
use crate::modules::cycles::core::state::{Cycle, CyclesState};

pub fn evolve(state: CyclesState, event: CycleEvent) -> CyclesState {
    match event {
        CycleEvent::CycleStartedV1(e) => {
            if state.active_cycle_id.is_some() || state.cycles.iter().any(|c| c.id == e.cycle_id) {
                return state;
            }
            let mut next = state;
            next.active_cycle_id = Some(e.cycle_id.clone());
            next.cycles.push(Cycle {
                id: e.cycle_id,
                task: e.task,
                minutes_amount: e.minutes_amount,
                start_date: e.start_date,
                interrupted_date: None,
                finished_date: None,
            });
            next
        }
        CycleEvent::CycleInterruptedV1(e) => {
            close_active(state, &e.cycle_id, |cycle| cycle.interrupted_date = Some(e.interrupted_date))
        }
        CycleEvent::CycleFinishedV1(e) => {
            close_active(state, &e.cycle_id, |cycle| cycle.finished_date = Some(e.finished_date))
        }
    }
}

fn close_active(mut state: CyclesState, cycle_id: &str, stamp: impl FnOnce(&mut Cycle)) -> CyclesState {
    if state.active_cycle_id.as_deref() != Some(cycle_id) {
        return state;
    }
    let Some(cycle) = state.cycles.iter_mut().find(|c| c.id == cycle_id) else {
        return state;
    };
    if cycle.is_terminal() {
        return state;
    }
    stamp(cycle);
    state.active_cycle_id = None;
    state
}
