mod common;

use reqwest::{header, StatusCode};
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn test_login() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/auth/login"))
        .json(&json!({ "email": "admin@patria.test", "password": "secret1" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["staff"]["role"], "admin");
    assert_eq!(body["redirect"], "/Dashboard");
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn test_login_rejects_bad_input_before_calling_the_api() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/auth/login"))
        .json(&json!({ "email": "not-an-email", "password": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert!(body["fields"]["email"].is_array());
    assert!(body["fields"]["password"].is_array());
    assert_eq!(app.upstream_hits("POST /api/v1/auth/login"), 0);
}

#[tokio::test]
async fn test_wrong_password_sends_back_to_login() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/auth/login"))
        .json(&json!({ "email": "admin@patria.test", "password": "nope" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["error"], "Invalid email or password");
    assert_eq!(body["redirect"], "/login");
}

#[tokio::test]
async fn test_session_requires_a_token() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/auth/session"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = app.login("chef@patria.test").await;
    let response = app
        .client
        .get(app.url("/auth/session"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["role"], "staff");
}

#[tokio::test]
async fn test_waiter_is_denied_admin_only_routes() {
    let app = spawn_app().await;
    let token = app.login("waiter@patria.test").await;

    let response = app
        .client
        .get(app.url("/api/staff"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["redirect"], "/follow-order");
    assert_eq!(app.upstream_hits("GET /api/v1/staff"), 0);

    let response = app
        .client
        .get(app.url("/api/access?path=/staff"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body, json!({ "access": "redirect", "redirect": "/follow-order" }));
}

#[tokio::test]
async fn test_admin_sees_the_sidebar() {
    let app = spawn_app().await;
    let token = app.login("admin@patria.test").await;

    let response = app
        .client
        .get(app.url("/api/navigation"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body.as_array().map(Vec::len), Some(5));
    assert_eq!(body[0]["link"], "/menu");
}

#[tokio::test]
async fn test_access_check_needs_a_path() {
    let app = spawn_app().await;
    let token = app.login("chef@patria.test").await;

    for url in ["/api/access", "/api/access?path=%20"] {
        let response = app
            .client
            .get(app.url(url))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response
            .json::<Value>()
            .await
            .expect("Failed to parse response JSON");
        assert_eq!(body["fields"]["path"][0], "Page path is required");
    }
}
