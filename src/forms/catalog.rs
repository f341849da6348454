use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ImageUpload, MultipartForm};
use crate::middleware::logging::ApiError;

#[derive(Clone, Debug, Validate)]
pub struct CategoryForm {
    #[validate(length(min = 2, max = 50, message = "Title must be between 2 and 50 characters"))]
    pub title: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

impl CategoryForm {
    pub fn from_multipart(form: &MultipartForm) -> CategoryForm {
        CategoryForm {
            title: form.owned("title"),
            description: form.text("description").map(str::to_owned),
        }
    }

    pub fn into_form(self, image: Option<ImageUpload>) -> Result<Form, ApiError> {
        self.validate()?;
        let mut form = Form::new().text("title", self.title);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        attach_image(form, image)
    }
}

#[derive(Clone, Debug, Validate)]
pub struct SubcategoryForm {
    #[validate(length(min = 2, max = 50, message = "Title must be between 2 and 50 characters"))]
    pub title: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

impl SubcategoryForm {
    pub fn from_multipart(form: &MultipartForm) -> SubcategoryForm {
        SubcategoryForm {
            title: form.owned("title"),
            description: form.text("description").map(str::to_owned),
            category: form.owned("category"),
        }
    }

    pub fn into_form(self, image: Option<ImageUpload>) -> Result<Form, ApiError> {
        self.validate()?;
        let mut form = Form::new()
            .text("title", self.title)
            .text("category", self.category);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        attach_image(form, image)
    }
}

fn attach_image(form: Form, image: Option<ImageUpload>) -> Result<Form, ApiError> {
    match image {
        Some(image) => Ok(form.part("image", image.into_part()?)),
        None => Ok(form),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct IngredientForm {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

impl IngredientForm {
    pub fn trimmed(mut self) -> IngredientForm {
        self.name = self.name.trim().to_owned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcategory_needs_a_category() {
        let form = SubcategoryForm::from_multipart(&MultipartForm::with_fields(
            [("title", "Cold brew")],
            None,
        ));
        match form.into_form(None).unwrap_err() {
            ApiError::Validation { fields, .. } => assert!(fields.contains_key("category")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn ingredient_names_are_trimmed_before_checking() {
        let form = IngredientForm {
            name: "  a ".into(),
            description: None,
        }
        .trimmed();
        assert!(form.validate().is_err());
    }
}
