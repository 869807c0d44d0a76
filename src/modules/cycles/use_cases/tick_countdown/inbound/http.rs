use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::cycles::use_cases::list_cycles::projection::active_countdown;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let view = active_countdown(&*state.store.lock().await);
    Json(view)
}
