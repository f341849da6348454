use axum::{
    extract::Extension,
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::access::landing_page;
use crate::client::LoginRequest;
use crate::forms::LoginForm;
use crate::middleware::auth::{generate_token, AuthError};
use crate::middleware::logging::{to_response, ApiError};
use crate::AppState;

//ROUTERS
pub fn auth_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .layer(Extension(state))
}

//ROUTES
async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<LoginForm>,
) -> Result<Response, ApiError> {
    let payload = LoginForm {
        email: payload.email.trim().to_owned(),
        password: payload.password,
    };
    payload.validate()?;

    let answer = state
        .client
        .login(&LoginRequest {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let role = answer.data.role().ok_or(AuthError::UnknownRole)?;
    let token = generate_token(&state.keys, &answer.data, &answer.token)?;
    info!(staff_id = %answer.data.id, role = %role, "Staff signed in");

    Ok(to_response(
        (
            StatusCode::OK,
            Json(LoginAnswer {
                token,
                staff: StaffSession {
                    id: answer.data.id,
                    name: answer.data.name,
                    email: answer.data.email,
                    role: role.as_str(),
                },
                redirect: landing_page(role),
            }),
        ),
        Ok(()),
    ))
}

//STRUCTS
#[derive(Serialize)]
struct LoginAnswer {
    token: String,
    staff: StaffSession,
    redirect: &'static str,
}

#[derive(Serialize)]
struct StaffSession {
    id: String,
    name: String,
    email: String,
    role: &'static str,
}
