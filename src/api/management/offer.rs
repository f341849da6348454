use axum::{
    extract::{Extension, Multipart, Path},
    http::StatusCode,
    response::Response,
    routing::{get, patch},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::forms::{check_id, MultipartForm, OfferForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::{with_image, with_images, OfferStats};
use crate::AppState;

//ROUTERS
pub fn offer_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/offers", get(get_offers).post(create_offer))
        .route("/offers/:id", get(get_offer))
        .route("/offers/:id/activate", patch(activate_offer))
        .route("/offers/:id/deactivate", patch(deactivate_offer))
        .layer(Extension(state))
}

//ROUTES
async fn get_offers(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let offers = state.client.offers(&claims.api_token).await?;
    let stats = OfferStats::from_offers(&offers);
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "offers": with_images(offers, state.client.image_base()),
                "stats": stats,
            })),
        ),
        Ok(()),
    ))
}

async fn get_offer(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let offer = state.client.offer(id, &claims.api_token).await?;
    let offer = with_image(offer, state.client.image_base());
    Ok(to_response((StatusCode::OK, Json(offer)), Ok(())))
}

async fn create_offer(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let form = MultipartForm::read(multipart, state.config.offer_image_limit).await?;
    let body = OfferForm::from_multipart(form).into_form()?;

    let created = state.client.create_offer(body, &claims.api_token).await?;
    info!(staff_id = %claims.staff_id, "Offer created");
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Offer created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn activate_offer(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let updated = state.client.activate_offer(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Offer activated",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}

async fn deactivate_offer(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let updated = state.client.deactivate_offer(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Offer deactivated",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}
