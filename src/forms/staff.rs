use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::error;
use crate::entities::Role;
use crate::middleware::logging::ApiError;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9 ]{7,20}$").unwrap());

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct StaffForm {
    #[validate(length(min = 3, max = 50, message = "Name must be between 3 and 50 characters"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *PHONE_REGEX, message = "Enter a valid phone number"))]
    pub phone: Option<String>,
}

impl StaffForm {
    /// New accounts need a password; edits may leave it out.
    pub fn check(&self, creating: bool) -> Result<(), ApiError> {
        if let Err(errors) = self.validate() {
            return Err(errors.into());
        }
        if creating && self.password.is_none() {
            return Err(ApiError::validation("password", "Password is required"));
        }
        Ok(())
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    Role::from_str(role)
        .map(|_| ())
        .map_err(|_| error("unknown_role", "Role must be admin, operation, staff or waiter"))
}
