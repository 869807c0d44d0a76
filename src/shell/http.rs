use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::cycles::use_cases::interrupt_cycle::inbound::http as interrupt_http;
use crate::modules::cycles::use_cases::list_cycles::inbound::http as history_http;
use crate::modules::cycles::use_cases::start_cycle::inbound::http as start_http;
use crate::modules::cycles::use_cases::tick_countdown::inbound::http as countdown_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cycles", post(start_http::handle))
        .route("/cycles/interrupt", post(interrupt_http::handle))
        .route("/cycles/active", get(countdown_http::handle))
        .route("/history", get(history_http::handle))
        .with_state(state)
}
