use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

use super::{error, ExtraForm};
use crate::entities::OrderStatus;
use crate::middleware::logging::ApiError;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct SectionForm {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

impl SectionForm {
    pub fn trimmed(mut self) -> SectionForm {
        self.name = self.name.trim().to_owned();
        self.description = self
            .description
            .map(|description| description.trim().to_owned())
            .filter(|description| !description.is_empty());
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct TableForm {
    #[validate(range(min = 1, message = "Table number must be at least 1"))]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 50, message = "Capacity must be between 1 and 50"))]
    pub capacity: Option<u32>,
    #[validate(length(min = 1, message = "Section is required"))]
    pub section: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct OrderForm {
    #[validate(length(min = 1, message = "Table is required"))]
    pub table: String,
    #[validate(length(min = 1, message = "An order needs at least one item"), nested)]
    pub items: Vec<OrderItemForm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct OrderItemForm {
    #[validate(length(min = 1, message = "Product is required"))]
    pub product: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub extras: Vec<ExtraForm>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct OrderStatusForm {
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

impl OrderStatusForm {
    /// The status in the spelling the remote API stores.
    pub fn canonical(&self) -> Result<OrderStatusForm, ApiError> {
        self.validate()?;
        let status = OrderStatus::from_str(self.status.trim())
            .map_err(|err| ApiError::validation("status", err))?;
        Ok(OrderStatusForm {
            status: status.as_str().to_owned(),
        })
    }
}

fn validate_status(status: &str) -> Result<(), ValidationError> {
    OrderStatus::from_str(status.trim())
        .map(|_| ())
        .map_err(|_| error("unknown_status", "Unknown order status"))
}
