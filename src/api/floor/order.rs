use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::{str::FromStr, sync::Arc};
use tracing::info;
use validator::Validate;

use crate::entities::OrderStatus;
use crate::forms::{check_id, OrderForm, OrderStatusForm};
use crate::middleware::auth::Claims;
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

//ROUTERS
pub fn order_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/order", get(get_orders).post(create_order))
        .route(
            "/order/:id",
            get(get_order).patch(update_order).delete(delete_order),
        )
        .layer(Extension(state))
}

//ROUTES
async fn get_orders(
    Query(params): Query<OrderQuery>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let status = match params.status.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(raw) => Some(
            OrderStatus::from_str(raw.trim()).map_err(|err| ApiError::validation("status", err))?,
        ),
        None => None,
    };
    let table = params.table.as_deref().filter(|id| !id.is_empty());

    let mut orders = state.client.orders(&claims.api_token).await?;
    orders.retain(|order| {
        status.as_ref().map_or(true, |status| &order.status == status)
            && table.map_or(true, |table| {
                order.table.as_ref().is_some_and(|t| t.id() == table)
            })
    });
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(to_response((StatusCode::OK, Json(orders)), Ok(())))
}

async fn get_order(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    let order = state.client.order(id, &claims.api_token).await?;
    Ok(to_response((StatusCode::OK, Json(order)), Ok(())))
}

async fn create_order(
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<OrderForm>,
) -> Result<Response, ApiError> {
    payload.validate()?;
    let created = state.client.create_order(&payload, &claims.api_token).await?;
    info!(
        staff_id = %claims.staff_id,
        table = %payload.table,
        items = payload.items.len(),
        "Order placed"
    );
    Ok(to_response(
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Order created successfully",
                "data": created,
            })),
        ),
        Ok(()),
    ))
}

async fn update_order(
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

async fn delete_order(
    Path(id): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Response, ApiError> {
    let id = check_id(&id)?;
    state.client.delete_order(id, &claims.api_token).await?;
    Ok(to_response(
        (
            StatusCode::OK,
            Json(json!({
                "message": "Order deleted successfully"
            })),
        ),
        Ok(()),
    ))
}

//STRUCTS
#[derive(Deserialize)]
struct OrderQuery {
    status: Option<String>,
    table: Option<String>,
}
