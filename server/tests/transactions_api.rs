//! HTTP tests for `/api/transactions`, driven through the router with
//! `tower::ServiceExt::oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json};
use serde_json::{json, Value};
use tower::ServiceExt;

fn request_body(description: &str, buyer: &str) -> Value {
    json!({
        "ticketDTO": {
            "eventId": 1,
            "description": description,
            "price": "120.00"
        },
        "buyerDTO": {
            "name": buyer,
            "email": format!("{}@example.com", buyer.to_lowercase())
        }
    })
}

#[tokio::test]
async fn test_list_on_empty_store_returns_empty_array() {
    let app = common::build_test_app();
    let response = get(&app, "/api/transactions/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_returns_201_with_payload_echoed() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/transactions/create",
        request_body("Camarote", "Maria"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["ticket"]["eventId"], 1);
    assert_eq!(json["ticket"]["description"], "Camarote");
    assert_eq!(json["ticket"]["price"], "120.00");
    assert_eq!(json["buyer"]["name"], "Maria");
    assert_eq!(json["buyer"]["email"], "maria@example.com");
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_missing_ticket_is_a_validation_error() {
    let app = common::build_test_app();
    let response = post_json(
        &app,
        "/api/transactions/create",
        json!({ "buyerDTO": { "name": "Maria", "email": "maria@example.com" } }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_buyer_is_a_validation_error() {
    let app = common::build_test_app();
    let mut body = request_body("Pista", "Maria");
    body.as_object_mut().unwrap().remove("buyerDTO");

    let response = post_json(&app, "/api/transactions/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was stored.
    let listing = body_json(get(&app, "/api/transactions/").await).await;
    assert_eq!(listing, json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/transactions/create")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_listing_after_two_creations() {
    let app = common::build_test_app();
    let first = body_json(
        post_json(&app, "/api/transactions/create", request_body("Pista", "Ana")).await,
    )
    .await;
    let second = body_json(
        post_json(&app, "/api/transactions/create", request_body("Frontstage", "Bruno")).await,
    )
    .await;

    let response = get(&app, "/api/transactions/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([first, second]));
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(&app, "/api/transactions/create", request_body("Pista", "Ana")).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = get(&app, &format!("/api/transactions/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let response = get(&app, "/api/transactions/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_price_with_fractional_cents_is_rejected() {
    let app = common::build_test_app();
    let mut body = request_body("Pista", "Ana");
    body["ticketDTO"]["price"] = json!("25.555");

    let response = post_json(&app, "/api/transactions/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_price_out_of_range_is_rejected() {
    let app = common::build_test_app();
    let mut body = request_body("Pista", "Ana");
    body["ticketDTO"]["price"] = json!("10000000000");

    let response = post_json(&app, "/api/transactions/create", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_price_is_echoed_with_two_decimals() {
    let app = common::build_test_app();
    let mut body = request_body("Pista", "Ana");
    body["ticketDTO"]["price"] = json!("25.5");

    let response = post_json(&app, "/api/transactions/create", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["ticket"]["price"], "25.50");
}

#[tokio::test]
async fn test_non_numeric_id_is_a_json_validation_error() {
    let app = common::build_test_app();
    let response = get(&app, "/api/transactions/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}
