pub mod queue;
pub mod section;

use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

use crate::access::KITCHEN;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::AppState;
use queue::queue_router;
use section::section_router;

pub fn kitchen_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(section_router(state.clone()))
        .merge(queue_router(state.clone()))
        .layer(from_fn_with_state(
            AuthState::new(&state.keys, KITCHEN),
            auth_middleware,
        ))
}
