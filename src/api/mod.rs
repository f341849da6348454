pub mod admin;
pub mod floor;
pub mod kitchen;
pub mod management;
pub mod public;
pub mod session;

use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;

use crate::AppState;
use admin::admin_api_router;
use floor::floor_api_router;
use kitchen::kitchen_api_router;
use management::management_api_router;
use public::public_api_router;
use session::session_api_router;

/// Room for the multipart fields sent next to an image.
const FORM_OVERHEAD: usize = 64 * 1024;

pub fn create_api_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.largest_image() + FORM_OVERHEAD;

    Router::new()
        .merge(public_api_router(state.clone()))
        .merge(session_api_router(state.clone()))
        .nest("/api", management_api_router(state.clone()))
        .nest("/api", admin_api_router(state.clone()))
        .nest("/api", kitchen_api_router(state.clone()))
        .nest("/api", floor_api_router(state.clone()))
        .layer(DefaultBodyLimit::max(body_limit))
}
