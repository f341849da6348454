pub mod access;
pub mod api;
pub mod client;
pub mod config;
pub mod entities;
pub mod forms;
pub mod middleware;
pub mod views;

use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::create_api_router;
use crate::client::{ApiClient, ClientError};
use crate::config::Config;
use crate::middleware::{auth::SessionKeys, logging::logging_middleware};

/// Everything a handler needs, shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub client: ApiClient,
    pub config: Config,
    pub keys: SessionKeys,
}

impl AppState {
    pub fn new(config: Config) -> Result<AppState, ClientError> {
        Ok(AppState {
            client: ApiClient::new(&config)?,
            keys: SessionKeys::new(&config.secret, config.session_hours),
            config,
        })
    }
}

pub fn app(state: AppState) -> Router {
    create_api_router(Arc::new(state))
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
