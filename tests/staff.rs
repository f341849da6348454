mod common;

use reqwest::{header, StatusCode};
use serde_json::{json, Value};

use common::spawn_app;

#[tokio::test]
async fn test_staff_members() {
    let app = spawn_app().await;
    let token = app.login("admin@patria.test").await;

    let body = app
        .client
        .get(app.url("/api/staff"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request")
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["role"], "waiter");

    let response = app
        .client
        .get(app.url("/api/staff/staff-waiter"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["name"], "Omar");
}

#[tokio::test]
async fn test_create_staff_needs_a_password() {
    let app = spawn_app().await;
    let token = app.login("admin@patria.test").await;

    let member = json!({
        "name": "Karim",
        "email": "karim@patria.test",
        "role": "staff"
    });
    let response = app
        .client
        .post(app.url("/api/staff"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .json(&member)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["fields"]["password"][0], "Password is required");
    assert_eq!(app.upstream_hits("POST /api/v1/staff"), 0);

    let mut member = member;
    member["password"] = json!("secret1");
    let response = app
        .client
        .post(app.url("/api/staff"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .json(&member)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let sent = app
        .upstream_body("POST /api/v1/staff")
        .expect("No staff member reached the API");
    assert_eq!(sent["password"], "secret1");
    assert_eq!(sent["role"], "staff");
}

#[tokio::test]
async fn test_update_staff_keeps_password_optional() {
    let app = spawn_app().await;
    let token = app.login("admin@patria.test").await;

    let response = app
        .client
        .put(app.url("/api/staff/staff-waiter"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .json(&json!({
            "name": "Omar Said",
            "email": "waiter@patria.test",
            "role": "waiter"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let sent = app
        .upstream_body("PUT /api/v1/staff/staff-waiter")
        .expect("No update reached the API");
    assert!(sent.get("password").is_none());

    let response = app
        .client
        .put(app.url("/api/staff/staff-waiter"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .json(&json!({
            "name": "Omar Said",
            "email": "waiter@patria.test",
            "role": "chef"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.upstream_hits("PUT /api/v1/staff/staff-waiter"), 1);
}

#[tokio::test]
async fn test_admin_cannot_delete_own_account() {
    let app = spawn_app().await;
    let token = app.login("admin@patria.test").await;

    let response = app
        .client
        .delete(app.url("/api/staff/staff-admin"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response
        .json::<Value>()
        .await
        .expect("Failed to parse response JSON");
    assert_eq!(body["error"], "You cannot delete your own account");
    assert_eq!(app.upstream_hits("DELETE /api/v1/staff/staff-admin"), 0);

    let response = app
        .client
        .delete(app.url("/api/staff/staff-waiter"))
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.upstream_hits("DELETE /api/v1/staff/staff-waiter"), 1);
}
