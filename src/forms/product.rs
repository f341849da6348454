use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::{error, ImageUpload, MultipartForm};
use crate::entities::parse_string_list;
use crate::middleware::logging::{field_messages, ApiError};

const MAX_EXTRAS: usize = 10;

/// Whether a product form creates a record or edits one that may already
/// carry an image.
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Edit { existing_image: Option<String> },
}

#[derive(Clone, Debug, Validate)]
pub struct ProductForm {
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: String,
    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must be between 10 and 500 characters"
    ))]
    pub description: String,
    #[validate(
        required(message = "Price is required"),
        range(min = 0.01, message = "Price must be at least 0.01")
    )]
    pub price: Option<f64>,
    #[validate(range(
        min = 0.01,
        max = 9999.99,
        message = "Price after discount must be between 0.01 and 9999.99"
    ))]
    pub price_after_discount: Option<f64>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub sub_category: Option<String>,
    #[validate(length(min = 1, message = "At least one ingredient must be added"))]
    pub ingredients: Vec<String>,
    pub extras: Vec<ExtraForm>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExtraForm {
    #[validate(length(min = 1, max = 50, message = "Extra name must be between 1 and 50 characters"))]
    pub name: String,
    #[validate(range(min = 0.01, max = 999.99, message = "Extra price must be between 0.01 and 999.99"))]
    pub price: f64,
}

impl ExtraForm {
    pub fn trimmed(mut self) -> ExtraForm {
        self.name = self.name.trim().to_owned();
        self
    }
}

impl ProductForm {
    /// Builds the form from the fields the dashboard posts. Numbers that do not
    /// parse are reported as validation errors.
    pub fn from_multipart(form: &MultipartForm) -> Result<ProductForm, ApiError> {
        let price = match form.number("price") {
            Some(None) => return Err(ApiError::validation("price", "Price must be a number")),
            Some(value) => value,
            None => None,
        };
        let price_after_discount = match form.number("priceAfterDiscount") {
            Some(None) => {
                return Err(ApiError::validation(
                    "price_after_discount",
                    "Price after discount must be a number",
                ))
            }
            Some(value) => value,
            None => None,
        };
        let extras = match form.text("extras") {
            Some(raw) => serde_json::from_str::<Vec<ExtraForm>>(raw)
                .map_err(|_| ApiError::validation("extras", "Extras must be a list of name and price"))?
                .into_iter()
                .map(ExtraForm::trimmed)
                .collect(),
            None => Vec::new(),
        };

        Ok(ProductForm {
            title: form.owned("title"),
            description: form.owned("description"),
            price,
            price_after_discount,
            category: form.owned("category"),
            sub_category: form.text("subCategory").map(str::to_owned),
            ingredients: form
                .text("ingredients")
                .map(parse_string_list)
                .unwrap_or_default()
                .into_iter()
                .map(|item| item.trim().to_owned())
                .filter(|item| !item.is_empty())
                .collect(),
            extras,
        })
    }

    /// Field rules plus the cross-field ones: the discounted price must stay
    /// below the price, and an image must exist after the submit.
    pub fn check(&self, image: Option<&ImageUpload>, mode: &FormMode) -> Result<(), ApiError> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        if let (Some(discounted), Some(price)) = (self.price_after_discount, self.price) {
            if !(discounted < price) {
                errors.add(
                    "price_after_discount",
                    error(
                        "less_than_price",
                        "Price after discount must be less than original price",
                    ),
                );
            }
        }

        let has_existing = matches!(mode, FormMode::Edit { existing_image: Some(_) });
        if image.is_none() && !has_existing {
            errors.add("image", error("image_required", "Product image is required"));
        }

        if self.extras.len() > MAX_EXTRAS {
            errors.add("extras", error("too_many_extras", "Maximum 10 extras allowed"));
        }

        let mut fields = field_messages(&errors);
        for (index, extra) in self.extras.iter().enumerate() {
            if let Err(extra_errors) = extra.validate() {
                for (field, messages) in field_messages(&extra_errors) {
                    fields.insert(format!("extras[{index}].{field}"), messages);
                }
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ApiError::invalid(fields))
        }
    }

    /// The multipart body the remote API expects. Lists travel JSON-encoded;
    /// an edit without a new image keeps the stored one through `imagePath`.
    pub fn into_form(self, image: Option<ImageUpload>, mode: &FormMode) -> Result<Form, ApiError> {
        let ingredients = serde_json::to_string(&self.ingredients)
            .map_err(|err| ApiError::Internal(err.to_string()))?;

        let mut form = Form::new()
            .text("title", self.title)
            .text("description", self.description)
            .text("price", self.price.unwrap_or_default().to_string())
            .text("category", self.category)
            .text("ingredients", ingredients);

        if let Some(discounted) = self.price_after_discount {
            form = form.text("priceAfterDiscount", discounted.to_string());
        }
        if let Some(sub_category) = self.sub_category {
            form = form.text("subCategory", sub_category);
        }
        if !self.extras.is_empty() {
            let extras = serde_json::to_string(&self.extras)
                .map_err(|err| ApiError::Internal(err.to_string()))?;
            form = form.text("extras", extras);
        }

        match (image, mode) {
            (Some(image), _) => Ok(form.part("image", image.into_part()?)),
            (None, FormMode::Edit { existing_image: Some(path) }) => {
                Ok(form.text("imagePath", path.clone()))
            }
            (None, _) => Ok(form),
        }
    }
}
