use axum::{
    body::Body,
    extract::{Extension, Path},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

static FILENAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-][A-Za-z0-9._-]{0,254}$").unwrap());

pub fn uploads_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/uploads/:filename", get(print_image))
        .layer(Extension(state))
}

/// Streams an uploaded image from the remote uploads path.
pub async fn print_image(
    Path(filename): Path<String>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    if !FILENAME_REGEX.is_match(&filename) || filename.contains("..") {
        return Err(ApiError::NotFound("Not found".to_owned()));
    }

    let upstream = state.client.fetch_image(&filename).await?;

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| {
            mime_guess::from_path(&filename)
                .first_raw()
                .unwrap_or("application/octet-stream")
                .to_owned()
        });

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type)
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("inline"),
    );

    let body = Body::from_stream(upstream.bytes_stream());
    Ok(to_response((StatusCode::OK, headers, body), Ok(())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_file_names_are_proxied() {
        assert!(FILENAME_REGEX.is_match("1715000000-latte.png"));
        assert!(!FILENAME_REGEX.is_match("../secret"));
        assert!(!FILENAME_REGEX.is_match(".env"));
        assert!(!FILENAME_REGEX.is_match("a/b.png"));
    }
}
