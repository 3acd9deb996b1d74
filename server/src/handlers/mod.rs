use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::response::success;

pub mod events;
pub mod samples;
pub mod tenants;
pub mod transactions;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    store: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "ingresso-api",
        store: state.store.as_str(),
    };

    success(payload, "Health check successful").into_response()
}
