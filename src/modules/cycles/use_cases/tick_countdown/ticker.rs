// Countdown ticker runner.
//
// Responsibilities
// - Keep at most one periodic task alive. The previous task is aborted before a new one is spawned.
// - Capture the followed cycle at registration time; ticks for any other cycle are discarded.
// - Stop on its own once the cycle finishes or the tick turns stale.

use crate::modules::cycles::core::state::Cycle;
use crate::modules::cycles::store::CyclesStore;
use crate::modules::cycles::use_cases::tick_countdown::tick::{TickOutcome, apply_tick};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

pub struct Ticker {
    store: Arc<Mutex<CyclesStore>>,
    period: Duration,
    running: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl Ticker {
    pub fn new(store: Arc<Mutex<CyclesStore>>, period: Duration) -> Self {
        Self {
            store,
            period,
            running: std::sync::Mutex::new(None),
        }
    }

    /// Re-targets the ticker at `active`. Must be called from within a tokio runtime.
    pub fn follow(&self, active: Option<Cycle>) {
        let mut running = self.running.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = running.take() {
            previous.abort();
        }
        let Some(cycle) = active else {
            return;
        };
        tracing::debug!(cycle_id = %cycle.id, period_ms = self.period.as_millis() as u64, "ticker following cycle");
        let store = self.store.clone();
        let period = self.period;
        *running = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let outcome = {
                    let mut guard = store.lock().await;
                    apply_tick(&mut guard, &cycle)
                };
                if !matches!(outcome, TickOutcome::Elapsed(_)) {
                    tracing::debug!(cycle_id = %cycle.id, ?outcome, "ticker stopped");
                    break;
                }
            }
        }));
    }

    pub fn stop(&self) {
        self.follow(None);
    }

    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.running.get_mut().ok().and_then(Option::take) {
            handle.abort();
        }
    }
}
