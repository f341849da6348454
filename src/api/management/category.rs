use axum::{
    extract::{Extension, Multipart, Path},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::forms::{check_id, CategoryForm, MultipartForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::{with_images, CategoryDetails};
use crate::AppState;

//ROUTERS
pub fn category_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/category", get(get_categories).post(create_category))
        .route(
            "/category/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .layer(Extension(state))
}

//ROUTES
async fn get_categories(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let categories = state.client.categories(&claims.api_token).await?;
    let categories = with_images(categories, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(categories)), Ok(())))
}

/// The category with its subcategories, both fetched at once.
async fn get_category(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let token = &claims.api_token;
    let (category, subcategories) = tokio::try_join!(
        state.client.category(id, token),
        state.client.subcategories_of(id, token),
    )?;
    let details = CategoryDetails::new(category, subcategories, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(details)), Ok(())))
}

async fn create_category(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = MultipartForm::read(multipart, state.config.product_image_limit).await?;
    let image = form.image.take();
    let body = CategoryForm::from_multipart(&form).into_form(image)?;

    let created = state.client.create_category(body, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, "Category created");
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Category created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_category(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let mut form = MultipartForm::read(multipart, state.config.product_image_limit).await?;
    let image = form.image.take();
    let body = CategoryForm::from_multipart(&form).into_form(image)?;

    let updated = state
        .client
        .update_category(id, body, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Category updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_category(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_category(id, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, category_id = id, "Category deleted");
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Category deleted successfully"
            })),
        ),
        Ok(()),
    ))
}
