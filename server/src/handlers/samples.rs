use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::domain::Sample;
use crate::dtos::SampleDto;
use crate::models::DbId;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::response::created;

/// GET /api/samples
pub async fn list_samples(State(state): State<AppState>) -> AppResult<Json<Vec<SampleDto>>> {
    let samples = state.samples.list().await?;
    Ok(Json(samples.into_iter().map(SampleDto::from).collect()))
}

/// GET /api/samples/:id
pub async fn get_sample(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<SampleDto>> {
    let Path(id) = path?;
    let sample = state.samples.get(id).await?;
    Ok(Json(sample.into()))
}

/// POST /api/samples
pub async fn create_sample(
    State(state): State<AppState>,
    payload: Result<Json<SampleDto>, JsonRejection>,
) -> AppResult<Response> {
    let Json(dto) = payload?;
    let sample = state.samples.create(Sample::from(dto)).await?;
    Ok(created(SampleDto::from(sample)))
}

/// PUT /api/samples/:id
pub async fn update_sample(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<SampleDto>, JsonRejection>,
) -> AppResult<Json<SampleDto>> {
    let Path(id) = path?;
    let Json(dto) = payload?;
    let sample = state.samples.update(id, Sample::from(dto)).await?;
    Ok(Json(sample.into()))
}

/// DELETE /api/samples/:id
pub async fn delete_sample(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.samples.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
