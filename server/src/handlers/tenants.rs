//! Handlers for `/api/tenants`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::domain::Tenant;
use crate::dtos::TenantDto;
use crate::models::DbId;
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::response::created;

/// GET /api/tenants
pub async fn list_tenants(State(state): State<AppState>) -> AppResult<Json<Vec<TenantDto>>> {
    let tenants = state.tenants.list().await?;
    Ok(Json(tenants.into_iter().map(TenantDto::from).collect()))
}

/// GET /api/tenants/:id
pub async fn get_tenant(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<TenantDto>> {
    let Path(id) = path?;
    let tenant = state.tenants.get(id).await?;
    Ok(Json(tenant.into()))
}

/// POST /api/tenants
pub async fn create_tenant(
    State(state): State<AppState>,
    payload: Result<Json<TenantDto>, JsonRejection>,
) -> AppResult<Response> {
    let Json(dto) = payload?;
    let tenant = state.tenants.create(Tenant::from(dto)).await?;
    Ok(created(TenantDto::from(tenant)))
}

/// PUT /api/tenants/:id
pub async fn update_tenant(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<TenantDto>, JsonRejection>,
) -> AppResult<Json<TenantDto>> {
    let Path(id) = path?;
    let Json(dto) = payload?;
    let tenant = state.tenants.update(id, Tenant::from(dto)).await?;
    Ok(Json(tenant.into()))
}

/// DELETE /api/tenants/:id
pub async fn delete_tenant(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;
    state.tenants.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
