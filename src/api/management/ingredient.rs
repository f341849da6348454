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

use crate::forms::{check_id, IngredientForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

pub fn ingredient_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/ingredients",
            get(get_ingredients).post(create_ingredient),
        )
        .route(
            "/ingredients/:id",
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
        .layer(Extension(state))
}

async fn get_ingredients(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let ingredients = state.client.ingredients(&claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(ingredients)), Ok(())))
}

async fn get_ingredient(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let ingredient = state.client.ingredient(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(ingredient)), Ok(())))
}

async fn create_ingredient(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<IngredientForm>,
) -> Result<Response, ApiError> {
    let payload = payload.trimmed();
    payload.validate()?;

    let created = state
        .client
        .create_ingredient(&payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Ingredient created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_ingredient(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<IngredientForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let payload = payload.trimmed();
    payload.validate()?;

    let updated = state
        .client
        .update_ingredient(id, &payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Ingredient updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_ingredient(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_ingredient(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Ingredient deleted successfully"
            })),
        ),
        Ok(()),
    ))
}
