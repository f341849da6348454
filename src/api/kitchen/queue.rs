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

use crate::forms::{check_id, OrderStatusForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::views::kitchen_queue;
use crate::AppState;

pub fn queue_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/kitchen", get(get_queue))
        .route("/kitchen/:id", get(get_ticket).patch(update_ticket))
        .layer(Extension(state))
}

async fn get_queue(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let orders = state.client.orders(&claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(kitchen_queue(orders))), Ok(())))
}

async fn get_ticket(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let order = state.client.order(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(order)), Ok(())))
}

/// Kitchen staff move an order along: preparing, ready and so on.
async fn update_ticket(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<OrderStatusForm>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let payload = payload.canonical()?;
    let updated = state
        .client
        .update_order(id, &payload, &claims.api_token)
        .await?;
    info!(staff_id = %claims.staff_id, order_id = id, status = %payload.status, "Order status changed");
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Order status updated",
                "data": updated,
            })),
        ),
        Ok(()),
    ))
}
