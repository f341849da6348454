use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::forms::{check_id, StaffForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

//ROUTERS
pub fn staff_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/staff", get(get_staff_members).post(create_staff))
        .route(
            "/staff/:id",
            get(get_staff_member).put(update_staff).delete(delete_staff),
        )
        .layer(Extension(state))
}

//ROUTES
async fn get_staff_members(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let staff = state.client.staff_members(&claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(staff)), Ok(())))
}

async fn get_staff_member(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let staff = state.client.staff_member(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(staff)), Ok(())))
}

async fn create_staff(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<StaffForm>,
) -> Result<Response, ApiError> {
    payload.check(true)?;

    let created = state.client.create_staff(&payload, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, role = %payload.role, "Staff member added");
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Staff member created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_staff(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<StaffForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    payload.check(false)?;

    let updated = state
        .client
        .update_staff(id, &payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Staff member updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_staff(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    if id == claims.staff_id {
        return Err(ApiError::BadRequest(
            "You cannot delete your own account".to_owned(),
        ));
    }
    state.client.delete_staff(id, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, removed = id, "Staff member deleted");
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Staff member deleted successfully"
            })),
        ),
        Ok(()),
    ))
}
