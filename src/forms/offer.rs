use reqwest::multipart::Form;

use super::{ImageUpload, MultipartForm};
use crate::middleware::logging::ApiError;

/// An offer is nothing but its image, and the image is required at submit.
#[derive(Clone, Debug)]
pub struct OfferForm {
    pub image: Option<ImageUpload>,
}

impl OfferForm {
    pub fn from_multipart(form: MultipartForm) -> OfferForm {
        OfferForm { image: form.image }
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let image = self
            .image
            .ok_or_else(|| ApiError::validation("image", "Please upload an image"))?;
        Ok(Form::new().part("image", image.into_part()?))
    }
}
