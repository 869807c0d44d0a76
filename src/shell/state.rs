use crate::modules::cycles::store::CyclesStore;
use crate::modules::cycles::use_cases::tick_countdown::ticker::Ticker;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<CyclesStore>>,
    pub ticker: Arc<Ticker>,
}

impl AppState {
    pub fn new(store: CyclesStore, tick_period: Duration) -> Self {
        let store = Arc::new(Mutex::new(store));
        let ticker = Arc::new(Ticker::new(store.clone(), tick_period));
        Self { store, ticker }
    }

    /// Points the ticker at whatever cycle the restored snapshot left active.
    pub async fn resume(&self) {
        let active = self.store.lock().await.active_cycle().cloned();
        if let Some(cycle) = &active {
            tracing::info!(cycle_id = %cycle.id, task = %cycle.task, "resuming active cycle");
        }
        self.ticker.follow(active);
    }
}
