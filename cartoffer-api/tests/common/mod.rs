#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::Query,
    http::{header, Request, StatusCode},
    routing::get,
    Json,
    Router,
};
use cartoffer_api::{app, AppState};
use cartoffer_core::{SegmentResolver, StaticSegmentResolver};
use cartoffer_store::InMemoryOfferRepository;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Router with an in-memory store where user 1 is `p1` and user 2 is `p2`
pub fn test_app() -> Router {
    test_app_with(Arc::new(StaticSegmentResolver::default().with_user(1, "p1").with_user(2, "p2")))
}

pub fn test_app_with(segments: Arc<dyn SegmentResolver>) -> Router {
    app(AppState::new(Arc::new(InMemoryOfferRepository::new()), segments))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn create_offer(app: &Router, restaurant_id: i64, offer_type: &str, offer_value: i64, segments: &[&str]) -> StatusCode {
    let (status, _) = post_json(
        app,
        "/api/v1/offer",
        json!({
            "restaurant_id": restaurant_id,
            "offer_type": offer_type,
            "offer_value": offer_value,
            "customer_segment": segments,
        }),
    )
    .await;
    status
}

/// Apply the restaurant's offer and return the resulting cart value
pub async fn apply_offer(app: &Router, cart_value: i64, user_id: i64, restaurant_id: i64) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/v1/cart/apply_offer",
        json!({
            "cart_value": cart_value,
            "user_id": user_id,
            "restaurant_id": restaurant_id,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "apply_offer failed: {}", body);
    body["cart_value"].as_i64().expect("cart_value in response")
}

/// Serve `router` on an ephemeral local port
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// User the mock segment service fails on with a 500
pub const FAILING_USER: i64 = 500;

/// User the mock segment service answers for without a `segment` field
pub const MALFORMED_USER: i64 = 600;

/// Stand-in for the user segment service
pub fn mock_segment_service(users: &[(i64, &str)]) -> Router {
    let users: HashMap<i64, String> = users.iter().map(|(id, s)| (*id, s.to_string())).collect();

    Router::new().route(
        "/api/v1/user_segment",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let user_id = params.get("user_id").and_then(|id| id.parse::<i64>().ok());
            let reply = match user_id {
                Some(FAILING_USER) => Err(StatusCode::INTERNAL_SERVER_ERROR),
                Some(MALFORMED_USER) => Ok(Json(json!({ "tier": "gold" }))),
                Some(id) => users
                    .get(&id)
                    .map(|segment| Json(json!({ "segment": segment })))
                    .ok_or(StatusCode::NOT_FOUND),
                None => Err(StatusCode::BAD_REQUEST),
            };
            async move { reply }
        }),
    )
}
