use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::forms::{check_id, TableForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

//ROUTERS
pub fn table_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/table", get(get_tables).post(create_table))
        .route(
            "/table/:id",
            get(get_table).put(update_table).delete(delete_table),
        )
        .layer(Extension(state))
}

//ROUTES
async fn get_tables(
    Query(params): Query<TableQuery>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let token = &claims.api_token;
    let mut tables = match params.section.as_deref().filter(|id| !id.is_empty()) {
        Some(section_id) => {
            let section_id = check_id(section_id)?;
            state.client.tables_in(section_id, token).await?
        }
        None => state.client.tables(token).await?,
    };
    tables.sort_by_key(|table| table.number);
    Ok(to_response((StatusCode::OK, Json(tables)), Ok(())))
}

async fn get_table(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let table = state.client.table(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(table)), Ok(())))
}

async fn create_table(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<TableForm>,
) -> Result<Response, ApiError> {
    payload.validate()?;
    let created = state.client.create_table(&payload, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Table created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_table(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<TableForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    payload.validate()?;
    let updated = state
        .client
        .update_table(id, &payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Table updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_table(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_table(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Table deleted successfully"
            })),
        ),
        Ok(()),
    ))
}

//STRUCTS
#[derive(Deserialize)]
struct TableQuery {
    section: Option<String>,
}
