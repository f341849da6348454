//! Typed access to the remote REST API.
//!
//! Every endpoint is one async method on [`ApiClient`]. The client keeps no
//! state besides the connection pool; the caller's API token travels with each
//! call in the `token` header.

pub mod auth;
pub mod catalog;
pub mod ingredients;
pub mod offers;
pub mod service;
pub mod staff;

use reqwest::{multipart::Form, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::entities::Envelope;

pub use auth::{LoginRequest, LoginResponse};

pub const TOKEN_HEADER: &str = "token";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Session rejected by the API: {0}")]
    Unauthorized(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    image_base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> ClientResult<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            image_base: config.image_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn image_base(&self) -> &str {
        &self.image_base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        debug!(method = %method, path, "Calling remote API");
        self.http
            .request(method, self.url(path))
            .header(TOKEN_HEADER, token)
    }

    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str, token: &str) -> ClientResult<T> {
        let response = self.request(Method::GET, path, token).send().await?;
        let envelope: Envelope<T> = handle_response(response).await?;
        Ok(envelope.into_inner())
    }

    pub(crate) async fn send_json<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path, token).json(body).send().await?;
        handle_response(response).await
    }

    pub(crate) async fn send_form(
        &self,
        method: Method,
        path: &str,
        form: Form,
        token: &str,
    ) -> ClientResult<Value> {
        let response = self.request(method, path, token).multipart(form).send().await?;
        handle_response(response).await
    }

    pub(crate) async fn send_empty(&self, method: Method, path: &str, token: &str) -> ClientResult<Value> {
        let response = self
            .request(method, path, token)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        handle_response(response).await
    }

    pub(crate) async fn remove(&self, path: &str, token: &str) -> ClientResult<Value> {
        let response = self.request(Method::DELETE, path, token).send().await?;
        handle_response(response).await
    }

    /// Fetches an uploaded image; the body is left unread so it can be streamed.
    pub async fn fetch_image(&self, filename: &str) -> ClientResult<Response> {
        let response = self
            .http
            .get(format!("{}{}", self.image_base, filename))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(classify(status, text))
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err(classify(status, String::from_utf8_lossy(&bytes).into_owned()));
    }
    if bytes.is_empty() {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

fn classify(status: StatusCode, body: String) -> ClientError {
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_owned()
    });
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pulls a human readable message out of an error body.
fn error_message(body: &str) -> Option<String> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error", "msg"] {
            if let Some(Value::String(message)) = map.get(key) {
                return Some(message.clone());
            }
        }
        return None;
    }
    let trimmed = body.trim();
    (!trimmed.is_empty() && trimmed.len() <= 200).then(|| trimmed.to_owned())
}
