use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::{borrow::Cow, collections::BTreeMap, time::Instant};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::client::ClientError;
use crate::middleware::auth::AuthError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const LOGIN_PAGE: &str = "/login";

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let request_id = Uuid::new_v4();
    let start = Instant::now();

    let mut response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed();
    match response.extensions().get::<Result<(), ApiError>>() {
        Some(Ok(_)) => info!(
            %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request"
        ),
        Some(Err(value)) if status.is_server_error() => error!(
            %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            value = %value,
            "Failed to process request"
        ),
        Some(Err(value)) => warn!(
            %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            value = %value,
            "Rejected request"
        ),
        None => info!(
            %request_id,
            method = %method,
            uri = %uri,
            status = %status,
            elapsed = ?elapsed,
            "Processed request without outcome"
        ),
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[derive(Clone, Debug, Error)]
pub enum ApiError {
    #[error("Failed to validate: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    #[error("{0}")]
    BadRequest(String),
    #[error("Not signed in: {0}")]
    Unauthorized(String),
    #[error("Session expired: {0}")]
    SessionExpired(String),
    #[error("Role {role} may not open this page")]
    Forbidden { role: String, redirect: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("Remote API answered {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(field: &str, message: impl Into<String>) -> ApiError {
        let message = message.into();
        ApiError::Validation {
            fields: BTreeMap::from([(field.to_owned(), vec![message.clone()])]),
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) | ApiError::SessionExpired(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Upstream { status, .. } => match StatusCode::from_u16(*status) {
                Ok(code) if code.is_client_error() => code,
                _ => StatusCode::BAD_GATEWAY,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            ApiError::Validation { message, fields } => json!({
                "error": message,
                "fields": fields,
            }),
            ApiError::Unauthorized(message) | ApiError::SessionExpired(message) => json!({
                "error": message,
                "redirect": LOGIN_PAGE,
            }),
            ApiError::Forbidden { redirect, .. } => json!({
                "error": "You do not have access to this page",
                "redirect": redirect,
            }),
            ApiError::Upstream { message, .. } => json!({ "error": message }),
            ApiError::Internal(_) => json!({ "error": "Internal server error" }),
            other => json!({ "error": other.to_string() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = (self.status(), Json(self.body()));
        to_response(response, Err(self))
    }
}

impl From<ClientError> for ApiError {
    fn from(value: ClientError) -> Self {
        match value {
            ClientError::Unauthorized(message) => ApiError::SessionExpired(message),
            ClientError::NotFound(message) => ApiError::NotFound(message),
            ClientError::Api { status, message } => ApiError::Upstream { status, message },
            ClientError::Http(err) => ApiError::Upstream {
                status: err.status().map(|s| s.as_u16()).unwrap_or(502),
                message: "Remote API is unreachable".to_owned(),
            },
            ClientError::InvalidResponse(err) => {
                ApiError::Internal(format!("Unreadable API response: {err}"))
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::GenerationFail => ApiError::Internal(value.to_string()),
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::invalid(field_messages(&errors))
    }
}

impl ApiError {
    /// A validation failure carrying every message per field; the first one
    /// doubles as the headline.
    pub fn invalid(fields: BTreeMap<String, Vec<String>>) -> ApiError {
        let message = fields
            .values()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| "Invalid input".to_owned());
        ApiError::Validation { message, fields }
    }
}

pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();
    collect_errors(errors, "", &mut fields);
    fields
}

fn collect_errors(errors: &ValidationErrors, prefix: &str, out: &mut BTreeMap<String, Vec<String>>) {
    for (field, kind) in errors.errors() {
        let name = match (prefix.is_empty(), field.as_ref()) {
            (true, "__all__") => "form".to_owned(),
            (false, "__all__") => prefix.to_owned(),
            (true, field) => field.to_owned(),
            (false, field) => format!("{prefix}.{field}"),
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                let messages = out.entry(name).or_default();
                messages.extend(list.iter().map(|err| {
                    err.message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(format!("Invalid value ({})", err.code)))
                        .into_owned()
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_errors(inner, &name, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_errors(inner, &format!("{name}[{index}]"), out);
                }
            }
        }
    }
}

pub fn to_response<T: IntoResponse>(
    response: T,               //The response that we are sending + StatusCode
    ext: Result<(), ApiError>, //The extension, that we want to give logging middleware
) -> Response {
    let mut response = response.into_response();

    response.extensions_mut().insert(ext);

    response
}
