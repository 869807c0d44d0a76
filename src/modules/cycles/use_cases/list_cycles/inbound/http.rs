use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::cycles::use_cases::list_cycles::projection::list_cycles;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let views = list_cycles(&*state.store.lock().await);
    Json(views)
}
