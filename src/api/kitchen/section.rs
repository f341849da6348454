use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::forms::{check_id, SectionForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

pub fn section_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/section", get(get_sections).post(create_section))
        .route(
            "/section/:id",
            get(get_section).put(update_section).delete(delete_section),
        )
        .route("/section/:id/tables", get(get_section_tables))
        .layer(Extension(state))
}

async fn get_sections(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let sections = state.client.sections(&claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(sections)), Ok(())))
}

async fn get_section(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let section = state.client.section(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(section)), Ok(())))
}

/// A section and its tables, fetched together.
async fn get_section_tables(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let token = &claims.api_token;
    let (section, tables) = tokio::try_join!(
        state.client.section(id, token),
        state.client.tables_in(id, token),
    )?;
    let tables: Vec<_> = tables
        .into_iter()
        .filter(|table| table.section.is_none() || table.in_section(id))
        .collect();
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "section": section,
                "tables": tables,
            })),
        ),
        Ok(()),
    ))
}

async fn create_section(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SectionForm>,
) -> Result<Response, ApiError> {
    let payload = payload.trimmed();
    payload.validate()?;
    let created = state
        .client
        .create_section(&payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Section created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_section(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<SectionForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let payload = payload.trimmed();
    payload.validate()?;
    let updated = state
        .client
        .update_section(id, &payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Section updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_section(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_section(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Section deleted successfully"
            })),
        ),
        Ok(()),
    ))
}
