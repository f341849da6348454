pub mod auth;
pub mod uploads;

use axum::Router;
use std::sync::Arc;

use crate::AppState;
use auth::auth_router;
use uploads::uploads_router;

pub fn public_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(auth_router(state.clone()))
        .merge(uploads_router(state.clone()))
}
