pub mod access;
pub mod account;

use axum::{middleware::from_fn_with_state, Router};
use std::sync::Arc;

use crate::access::ANY_ROLE;
use crate::middleware::auth::{auth_middleware, AuthState};
use crate::AppState;
use access::access_router;
use account::account_router;

/// Routes open to every signed-in role.
pub fn session_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(account_router(state.clone()))
        .merge(access_router(state.clone()))
        .layer(from_fn_with_state(
            AuthState::new(&state.keys, ANY_ROLE),
            auth_middleware,
        ))
}
