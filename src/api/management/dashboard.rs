use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::{DashboardSummary, OfferStats, ReviewStats};
use crate::AppState;

pub fn dashboard_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .layer(Extension(state))
}

async fn get_dashboard(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let token = &claims.api_token;
    let (categories, products, offers, reviews) = tokio::try_join!(
        state.client.categories(token),
        state.client.products(token),
        state.client.offers(token),
        state.client.reviews(token),
    )?;

    let summary = DashboardSummary {
        categories: categories.len(),
        products: products.len(),
        active_offers: OfferStats::from_offers(&offers).active,
        reviews: ReviewStats::from_reviews(&reviews),
    };
    Ok(to_response((StatusCode::OK, Json(summary)), Ok(())))
}
