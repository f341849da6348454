use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, LOGIN_PAGE};
use crate::AppState;

pub fn account_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/session", get(get_session))
        .route("/auth/logout", post(logout))
        .layer(Extension(state))
}

async fn get_session(Extension(claims): Extension<Claims>) -> Response {
    to_response(
        (
            StatusCode::OK,
            Json(json!({
                "id": claims.staff_id,
                "name": claims.name,
                "role": claims.role,
                "expiresAt": claims.exp,
            })),
        ),
        Ok(()),
    )
}

/// Sessions are stateless, so signing out only tells the dashboard where to go.
async fn logout(Extension(claims): Extension<Claims>) -> Response {
    info!(staff_id = %claims.staff_id, "Staff signed out");
    to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Signed out",
                "redirect": LOGIN_PAGE,
            })),
        ),
        Ok(()),
    )
}
