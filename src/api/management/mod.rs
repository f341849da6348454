pub mod category;
pub mod dashboard;
pub mod ingredient;
pub mod offer;
pub mod product;
pub mod review;
pub mod subcategory;

use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

use crate::access::MANAGEMENT;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::AppState;
use category::category_router;
use dashboard::dashboard_router;
use ingredient::ingredient_router;
use offer::offer_router;
use product::product_router;
use review::review_router;
use subcategory::subcategory_router;

/// Menu management pages: admin and operation.
pub fn management_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(dashboard_router(state.clone()))
        .merge(category_router(state.clone()))
        .merge(subcategory_router(state.clone()))
        .merge(product_router(state.clone()))
        .merge(ingredient_router(state.clone()))
        .merge(offer_router(state.clone()))
        .merge(review_router(state.clone()))
        .layer(from_fn_with_state(
            AuthState::new(&state.keys, MANAGEMENT),
            auth_middleware,
        ))
}
