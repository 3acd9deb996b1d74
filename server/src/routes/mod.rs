use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{events, health_check, samples, tenants, transactions};
use crate::state::AppState;

pub fn create_routes(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(transaction_routes())
        .merge(event_routes())
        .merge(tenant_routes())
        .merge(sample_routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}

fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/transactions/",
            get(transactions::get_all_transactions),
        )
        .route(
            "/api/transactions/create",
            post(transactions::create_transaction),
        )
        .route("/api/transactions/:id", get(transactions::get_transaction))
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
}

fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/tenants",
            get(tenants::list_tenants).post(tenants::create_tenant),
        )
        .route(
            "/api/tenants/:id",
            get(tenants::get_tenant)
                .put(tenants::update_tenant)
                .delete(tenants::delete_tenant),
        )
}

fn sample_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/samples",
            get(samples::list_samples).post(samples::create_sample),
        )
        .route(
            "/api/samples/:id",
            get(samples::get_sample)
                .put(samples::update_sample)
                .delete(samples::delete_sample),
        )
}
