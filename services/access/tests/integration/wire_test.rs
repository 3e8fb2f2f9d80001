//! Router-level checks of the wire contract: statuses, exact error bodies,
//! and CORS behavior. Paths that need a live role store are covered by the
//! usecase tests; here the state is wired with a disconnected store.

use axum::http::{HeaderValue, Method, StatusCode, header};
use axum_test::TestServer;
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

use plantdesk_access::router::build_router;
use plantdesk_access::state::AppState;
use plantdesk_auth_types::JwtClaims;

use crate::helpers::TEST_JWT_SECRET;

fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    TestServer::new(build_router(state)).unwrap()
}

fn mint_token(sub: &str) -> String {
    let exp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
        + 3600;
    let claims = JwtClaims {
        sub: sub.to_owned(),
        email: format!("{sub}@plantdesk.example"),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn should_serve_health_endpoints() {
    let server = test_server();
    assert_eq!(server.get("/healthz").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/readyz").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_answer_preflight_with_permissive_cors_headers() {
    let server = test_server();

    let response = server
        .method(Method::OPTIONS, "/access/roles")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://plantdesk.example"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
    assert_eq!(response.text(), "");
}

#[tokio::test]
async fn should_stamp_cors_headers_on_error_responses() {
    let server = test_server();

    let response = server
        .post("/access/roles")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://plantdesk.example"),
        )
        .json(&json!({ "targetUserId": "u1", "newRole": "accountant" }))
        .await;

    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn should_return_exact_body_for_missing_authorization_header() {
    let server = test_server();

    let response = server
        .post("/access/roles")
        .json(&json!({ "targetUserId": "u1", "newRole": "accountant" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No authorization header" })
    );
}

#[tokio::test]
async fn should_return_exact_body_for_invalid_token() {
    let server = test_server();

    let response = server
        .post("/access/roles")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer not-a-jwt"),
        )
        .json(&json!({ "targetUserId": "u1", "newRole": "accountant" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>(), json!({ "error": "Invalid token" }));
}

#[tokio::test]
async fn should_reject_roster_requests_without_a_token() {
    let server = test_server();

    let response = server.get("/access/users").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No authorization header" })
    );
}

#[tokio::test]
async fn should_mask_store_outages_as_internal_server_error() {
    let server = test_server();

    // The token verifies, so the admin lookup is the first store round trip;
    // against a disconnected store it must surface as a plain 500.
    let response = server
        .post("/access/roles")
        .add_header(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", mint_token("admin-1"))).unwrap(),
        )
        .json(&json!({ "targetUserId": "u1", "newRole": "accountant" }))
        .await;

    assert_eq!(
        response.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Internal server error" })
    );
}
