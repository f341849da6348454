pub mod staff;

use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

use crate::access::ADMIN_ONLY;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::AppState;
use staff::staff_router;

pub fn admin_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(staff_router(state.clone()))
        .layer(from_fn_with_state(
            AuthState::new(&state.keys, ADMIN_ONLY),
            auth_middleware,
        ))
}
