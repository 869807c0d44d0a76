use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};

use crate::modules::cycles::core::decision::DecideError;
use crate::modules::cycles::use_cases::list_cycles::projection::CycleView;
use crate::modules::cycles::use_cases::start_cycle::form::{FieldError, NewCycleForm, ValidationErrors};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewCycleForm>, JsonRejection>,
) -> impl IntoResponse {
    let Json(form) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "start request body rejected");
            let errors = ValidationErrors {
                errors: vec![FieldError {
                    field: "body",
                    message: "Send a JSON object with a text task and a whole number minutesAmount.",
                }],
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response();
        }
    };

    let valid = match form.validate() {
        Ok(v) => v,
        Err(errors) => return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response(),
    };

    // The ticker is re-targeted under the store lock so it always follows the latest active cycle.
    let mut store = state.store.lock().await;
    match store.start(valid.task, valid.minutes_amount) {
        Ok(cycle) => {
            let view = CycleView::from(&cycle);
            state.ticker.follow(Some(cycle));
            drop(store);
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(DecideError::AlreadyActive) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
