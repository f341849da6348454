use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::Arc};
use thiserror::Error;
use tracing::debug;

use crate::access::{is_allowed, landing_page};
use crate::entities::{Role, Staff};
use crate::middleware::logging::ApiError;

/// What the dashboard keeps about the signed-in staff member. Travels as a
/// signed token; `api_token` is the remote API token passed on every call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub api_token: String,
    pub exp: usize,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        Role::from_str(&self.role).ok()
    }
}

#[derive(Clone, Debug)]
pub struct SessionKeys {
    secret: Arc<str>,
    ttl_hours: i64,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> SessionKeys {
        SessionKeys {
            secret: Arc::from(secret),
            ttl_hours,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthState {
    pub keys: SessionKeys,
    pub roles: &'static [Role],
}

impl AuthState {
    pub fn new(keys: &SessionKeys, roles: &'static [Role]) -> AuthState {
        AuthState {
            keys: keys.clone(),
            roles,
        }
    }
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingToken)?;

    let claims = validate_token(&state.keys, token)?;
    let role = claims.role().ok_or(AuthError::UnknownRole)?;

    if !is_allowed(role, state.roles) {
        debug!(staff_id = %claims.staff_id, role = %role, uri = %req.uri(), "Role not allowed");
        return Err(ApiError::Forbidden {
            role: claims.role,
            redirect: landing_page(role).to_owned(),
        });
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

pub fn generate_token(keys: &SessionKeys, staff: &Staff, api_token: &str) -> Result<String, AuthError> {
    let exp = Utc::now()
        .checked_add_signed(Duration::hours(keys.ttl_hours))
        .ok_or(AuthError::GenerationFail)?
        .timestamp() as usize;

    let claims = Claims {
        staff_id: staff.id.clone(),
        name: staff.name.clone(),
        role: staff.role.clone(),
        api_token: api_token.to_owned(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(keys.secret.as_bytes()),
    )
    .map_err(|_| AuthError::GenerationFail)
}

pub fn validate_token(keys: &SessionKeys, token: &str) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(keys.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::ValidationFail,
    })
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,
    #[error("Unknown role")]
    UnknownRole,
    #[error("Token expired")]
    TokenExpired,
    #[error("Failed to validate token")]
    ValidationFail,
    #[error("Failed to generate token")]
    GenerationFail,
}
