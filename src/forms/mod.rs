//! Input checks run before anything is sent to the remote API.

pub mod catalog;
pub mod offer;
pub mod product;
pub mod service;
pub mod staff;

pub use catalog::{CategoryForm, IngredientForm, SubcategoryForm};
pub use offer::OfferForm;
pub use product::{ExtraForm, FormMode, ProductForm};
pub use service::{OrderForm, OrderItemForm, OrderStatusForm, SectionForm, TableForm};
pub use staff::{LoginForm, StaffForm};

use axum::{body::Bytes, extract::Multipart};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::multipart::Part;
use std::{borrow::Cow, collections::HashMap};
use validator::ValidationError;

use crate::middleware::logging::ApiError;

static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

pub(crate) fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Record ids end up in remote API paths, so only plain tokens pass.
pub fn check_id(id: &str) -> Result<&str, ApiError> {
    if ID_REGEX.is_match(id) {
        Ok(id)
    } else {
        Err(ApiError::BadRequest(format!("Invalid id: {id:?}")))
    }
}

//utils
fn allowed_content_types() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("image/jpeg", "jpg"),
        ("image/jpg", "jpg"),
        ("image/png", "png"),
        ("image/gif", "gif"),
        ("image/webp", "webp"),
    ])
}

fn readable_size(bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else {
        format!("{}KB", bytes / 1024)
    }
}

/// An image file taken from a multipart body.
#[derive(Clone, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// The declared content type wins unless it is missing or generic, then
    /// the type is guessed from the file name.
    pub fn new(file_name: String, declared: Option<String>, bytes: Bytes) -> ImageUpload {
        let content_type = declared
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream")
            .unwrap_or_else(|| {
                mime_guess::from_path(&file_name)
                    .first_raw()
                    .unwrap_or("application/octet-stream")
                    .to_owned()
            });
        ImageUpload {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn check(&self, size_limit: usize) -> Result<(), ApiError> {
        if !allowed_content_types().contains_key(self.content_type.as_str()) {
            return Err(ApiError::validation(
                "image",
                "Please select a valid image file (JPEG, PNG, GIF, or WebP)",
            ));
        }
        if self.bytes.len() > size_limit {
            return Err(ApiError::PayloadTooLarge(format!(
                "Image size must be less than {}",
                readable_size(size_limit)
            )));
        }
        Ok(())
    }

    pub fn into_part(self) -> Result<Part, ApiError> {
        let file_name = if self.file_name.is_empty() {
            let ext = allowed_content_types()
                .get(self.content_type.as_str())
                .copied()
                .unwrap_or("bin");
            format!("upload.{ext}")
        } else {
            self.file_name
        };
        Part::bytes(self.bytes.to_vec())
            .file_name(file_name)
            .mime_str(&self.content_type)
            .map_err(|err| ApiError::Internal(format!("Failed to build upload part: {err}")))
    }
}

/// Text fields and the `image` file of a multipart body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart, size_limit: usize) -> Result<MultipartForm, ApiError> {
        let mut form = MultipartForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| ApiError::BadRequest(format!("Malformed multipart body: {err}")))?
        {
            let name = field.name().unwrap_or_default().to_owned();
            let file_name = field.file_name().map(str::to_owned);

            match file_name {
                Some(file_name) => {
                    let declared = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await.map_err(|err| {
                        ApiError::BadRequest(format!("Failed to read file bytes: {err}"))
                    })?;
                    // An untouched file input still sends an empty part.
                    if bytes.is_empty() {
                        continue;
                    }
                    let upload = ImageUpload::new(file_name, declared, bytes);
                    upload.check(size_limit)?;
                    if name == "image" {
                        form.image = Some(upload);
                    }
                }
                None => {
                    let text = field.text().await.map_err(|err| {
                        ApiError::BadRequest(format!("Failed to read field {name}: {err}"))
                    })?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    pub fn with_fields<I, K, V>(fields: I, image: Option<ImageUpload>) -> MultipartForm
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MultipartForm {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            image,
        }
    }

    /// Trimmed text of a field; blank counts as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn owned(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_owned()
    }

    /// `None` when absent; `Some(None)` when present but not a finite number.
    pub fn number(&self, name: &str) -> Option<Option<f64>> {
        self.text(name).map(|value| {
            value
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_plain_tokens() {
        assert!(check_id("64b7f0c2a1b2c3d4e5f60718").is_ok());
        assert!(check_id("../auth/login").is_err());
        assert!(check_id("").is_err());
    }

    #[test]
    fn content_type_is_guessed_from_the_name() {
        let upload = ImageUpload::new("promo.PNG".into(), None, Bytes::from_static(b"png"));
        assert_eq!(upload.content_type, "image/png");
        assert!(upload.check(1024).is_ok());
    }

    #[test]
    fn oversized_and_foreign_files_are_rejected() {
        let big = ImageUpload::new(
            "big.jpg".into(),
            Some("image/jpeg".into()),
            Bytes::from(vec![0u8; 2048]),
        );
        assert!(matches!(big.check(1024), Err(ApiError::PayloadTooLarge(_))));

        let pdf = ImageUpload::new("menu.pdf".into(), None, Bytes::from_static(b"%PDF"));
        assert!(matches!(pdf.check(1024), Err(ApiError::Validation { .. })));
    }

    #[test]
    fn gif_and_jpg_aliases_are_images() {
        let gif = ImageUpload::new(
            "promo.gif".into(),
            Some("image/gif".into()),
            Bytes::from_static(b"GIF89a"),
        );
        assert!(gif.check(800 * 1024).is_ok());
        let jpg = ImageUpload::new(
            "promo.jpg".into(),
            Some("image/jpg".into()),
            Bytes::from_static(b"jpg"),
        );
        assert!(jpg.check(800 * 1024).is_ok());
    }

    #[test]
    fn size_limit_is_reported_readably() {
        let png = ImageUpload::new(
            "dish.png".into(),
            None,
            Bytes::from(vec![0u8; 2 * 1024 * 1024]),
        );
        assert!(png.check(5 * 1024 * 1024).is_ok());
        match png.check(800 * 1024) {
            Err(ApiError::PayloadTooLarge(message)) => {
                assert_eq!(message, "Image size must be less than 800KB")
            }
            other => panic!("unexpected {other:?}"),
        }
        let big = ImageUpload::new(
            "dish.png".into(),
            None,
            Bytes::from(vec![0u8; 6 * 1024 * 1024]),
        );
        assert!(matches!(
            big.check(5 * 1024 * 1024),
            Err(ApiError::PayloadTooLarge(ref m)) if m == "Image size must be less than 5MB"
        ));
    }

    #[test]
    fn blank_fields_read_as_absent() {
        let form = MultipartForm::with_fields([("price", " 4.5 "), ("priceAfterDiscount", "")], None);
        assert_eq!(form.number("price"), Some(Some(4.5)));
        assert_eq!(form.number("priceAfterDiscount"), None);
        assert_eq!(form.text("missing"), None);
    }

    #[test]
    fn non_finite_numbers_are_not_numbers() {
        let form = MultipartForm::with_fields(
            [("a", "NaN"), ("b", "inf"), ("c", "-infinity"), ("d", "1e3")],
            None,
        );
        assert_eq!(form.number("a"), Some(None));
        assert_eq!(form.number("b"), Some(None));
        assert_eq!(form.number("c"), Some(None));
        assert_eq!(form.number("d"), Some(Some(1000.0)));
    }
}
