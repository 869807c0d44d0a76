use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::cycles::use_cases::list_cycles::projection::CycleView;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let mut store = state.store.lock().await;
    let interrupted = store.interrupt();
    // Stopped under the store lock, so a concurrent start cannot have its ticker cancelled here.
    state.ticker.stop();
    drop(store);
    match interrupted {
        Some(cycle) => Json(CycleView::from(&cycle)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
