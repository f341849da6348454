use axum::{
    extract::{Extension, Multipart, Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::forms::{check_id, MultipartForm, SubcategoryForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::{with_images, SubcategoryDetails};
use crate::AppState;

//ROUTERS
pub fn subcategory_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/subcategory",
            get(get_subcategories).post(create_subcategory),
        )
        .route(
            "/subcategory/:id",
            get(get_subcategory)
                .put(update_subcategory)
                .delete(delete_subcategory),
        )
        .layer(Extension(state))
}

//ROUTES
async fn get_subcategories(
    Query(params): Query<SubcategoryQuery>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let token = &claims.api_token;
    let subcategories = match params.category.as_deref().filter(|id| !id.is_empty()) {
        Some(category_id) => {
            let category_id = check_id(category_id)?;
            state.client.subcategories_of(category_id, token).await?
        }
        None => state.client.subcategories(token).await?,
    };
    let subcategories = with_images(subcategories, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(subcategories)), Ok(())))
}

async fn get_subcategory(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let token = &claims.api_token;
    let (subcategory, products) = tokio::try_join!(
        state.client.subcategory(id, token),
        state.client.products_of(id, token),
    )?;
    let details = SubcategoryDetails::new(subcategory, products, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(details)), Ok(())))
}

async fn create_subcategory(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = MultipartForm::read(multipart, state.config.product_image_limit).await?;
    let image = form.image.take();
    let body = SubcategoryForm::from_multipart(&form).into_form(image)?;

    let created = state
        .client
        .create_subcategory(body, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Subcategory created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_subcategory(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let mut form = MultipartForm::read(multipart, state.config.product_image_limit).await?;
    let image = form.image.take();
    let body = SubcategoryForm::from_multipart(&form).into_form(image)?;

    let updated = state
        .client
        .update_subcategory(id, body, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Subcategory updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_subcategory(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_subcategory(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Subcategory deleted successfully"
            })),
        ),
        Ok(()),
    ))
}

//STRUCTS
#[derive(Deserialize)]
struct SubcategoryQuery {
    category: Option<String>,
}
