pub mod order;
pub mod table;

use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

use crate::access::FLOOR;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::AppState;
use order::order_router;
use table::table_router;

/// Tables and orders: admin, operation and waiters.
pub fn floor_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(table_router(state.clone()))
        .merge(order_router(state.clone()))
        .layer(from_fn_with_state(
            AuthState::new(&state.keys, FLOOR),
            auth_middleware,
        ))
}
