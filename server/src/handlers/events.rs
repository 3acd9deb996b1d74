//! Handlers for `/api/events`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::domain::Event;
use crate::dtos::EventDto;
use crate::models::DbId;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::response::created;

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<EventDto>>> {
    let events = state.events.list().await?;
    Ok(Json(events.into_iter().map(EventDto::from).collect()))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<EventDto>> {
    let Path(id) = path?;
    let event = state.events.get(id).await?;
    Ok(Json(event.into()))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventDto>, JsonRejection>,
) -> AppResult<Response> {
    let Json(dto) = payload?;
    let event = state.events.create(Event::from(dto)).await?;
    Ok(created(EventDto::from(event)))
}

/// PUT /api/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<EventDto>, JsonRejection>,
) -> AppResult<Json<EventDto>> {
    let Path(id) = path?;
    let Json(dto) = payload?;
    let event = state.events.update(id, Event::from(dto)).await?;
    Ok(Json(event.into()))
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
