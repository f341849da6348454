use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::ReviewStats;
use crate::AppState;

pub fn review_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/review", get(get_reviews))
        .layer(Extension(state))
}

async fn get_reviews(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let reviews = state.client.reviews(&claims.api_token).await?;
    let stats = ReviewStats::from_reviews(&reviews);
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "reviews": reviews,
                "stats": stats,
            })),
        ),
        Ok(()),
    ))
}
