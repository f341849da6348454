use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::access::{check_page, navigation, PageAccess};
use crate::middleware::auth::{AuthError, Claims};
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

pub fn access_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/navigation", get(get_navigation))
        .route("/api/access", get(get_access))
        .layer(Extension(state))
}

async fn get_navigation(Extension(claims): Extension<Claims>) -> Result<Response, ApiError> {
    let role = claims.role().ok_or(AuthError::UnknownRole)?;
    Ok(to_response((StatusCode::OK, Json(navigation(role))), Ok(())))
}

async fn get_access(
    Query(params): Query<AccessQuery>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let path = params
        .path
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ApiError::validation("path", "Page path is required"))?;
    let decision: PageAccess = check_page(Some(claims.role.as_str()), path);
    Ok(to_response((StatusCode::OK, Json(decision)), Ok(())))
}

#[derive(Deserialize)]
struct AccessQuery {
    path: Option<String>,
}
