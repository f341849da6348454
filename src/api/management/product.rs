use axum::{
    extract::{Extension, Multipart, Path, Query},
    http::StatusCode,
    response::Response,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::forms::{check_id, ExtraForm, FormMode, MultipartForm, ProductForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::{filter_products, with_image, with_images, MenuQuery};
use crate::AppState;

//ROUTERS
pub fn product_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/product", get(get_products).post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/products/:id/extras", get(get_extras).post(create_extra))
        .route(
            "/products/:id/extras/:extra_id",
            put(update_extra).delete(delete_extra),
        )
        .route("/menu", get(get_menu))
        .layer(Extension(state))
}

//ROUTES
async fn get_products(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let products = state.client.products(&claims.api_token).await?;
    let products = with_images(products, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(products)), Ok(())))
}

/// Menu display: every product, narrowed by category and title.
async fn get_menu(
    Query(params): Query<MenuQuery>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let products = state.client.products(&claims.api_token).await?;
    let total = products.len();
    let products = filter_products(
        products,
        params.category.as_deref(),
        params.title.as_deref(),
    );
    debug!(total, shown = products.len(), "Filtered menu");
    let products = with_images(products, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(products)), Ok(())))
}

async fn get_product(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let product = state.client.product(id, &claims.api_token).await?;
    let product = with_image(product, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(product)), Ok(())))
}

async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = MultipartForm::read(multipart, state.config.product_image_limit).await?;
    let image = form.image.take();
    let product = ProductForm::from_multipart(&form)?;

    let mode = FormMode::Create;
    product.check(image.as_ref(), &mode)?;
    let body = product.into_form(image, &mode)?;

    let created = state.client.create_product(body, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, "Product created");
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Product created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

/// An edit may keep the stored image, so the current product is read first.
async fn update_product(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let mut form = MultipartForm::read(multipart, state.config.product_image_limit).await?;
    let image = form.image.take();
    let product = ProductForm::from_multipart(&form)?;

    let existing = state.client.product(id, &claims.api_token).await?;
    let mode = FormMode::Edit {
        existing_image: existing
            .has_image()
            .then(|| existing.image.as_ref().map(|image| image.filename().to_owned()))
            .flatten(),
    };
    product.check(image.as_ref(), &mode)?;
    let body = product.into_form(image, &mode)?;

    let updated = state
        .client
        .update_product(id, body, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Product updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_product(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_product(id, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, product_id = id, "Product deleted");
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Product deleted successfully"
            })),
        ),
        Ok(()),
    ))
}

async fn get_extras(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let extras = state.client.extras(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(extras)), Ok(())))
}

async fn create_extra(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ExtraForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let payload = payload.trimmed();
    payload.validate()?;

    let created = state
        .client
        .create_extra(id, &payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Extra added successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_extra(
    Path((id, extra_id)): Path<(String, String)>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ExtraForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let extra_id = check_id(&extra_id)?;
    let payload = payload.trimmed();
    payload.validate()?;

    let updated = state
        .client
        .update_extra(id, extra_id, &payload, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Extra updated successfully",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn delete_extra(
    Path((id, extra_id)): Path<(String, String)>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let extra_id = check_id(&extra_id)?;
    state
        .client
        .delete_extra(id, extra_id, &claims.api_token)
        .await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Extra deleted successfully"
            })),
        ),
        Ok(()),
    ))
}
