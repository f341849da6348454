//! Read-side shaping of remote API data: filters, counts and detail pages.

pub mod details;
pub mod kitchen;
pub mod menu;
pub mod stats;

pub use details::{CategoryDetails, SubcategoryDetails};
pub use kitchen::kitchen_queue;
pub use menu::{filter_products, MenuQuery};
pub use stats::{DashboardSummary, OfferStats, ReviewStats};

use serde::Serialize;

use crate::entities::{Category, ImageRef, Offer, Product, Subcategory};

/// A record as the dashboard shows it, with its image resolved to a full URL.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithImage<T> {
    #[serde(flatten)]
    pub record: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub trait HasImage {
    fn image(&self) -> &Option<ImageRef>;
}

macro_rules! has_image {
    ($($ty:ty),*) => {
        $(impl HasImage for $ty {
            fn image(&self) -> &Option<ImageRef> {
                &self.image
            }
        })*
    };
}

has_image!(Category, Subcategory, Product, Offer);

pub fn with_image<T: HasImage>(record: T, image_base: &str) -> WithImage<T> {
    let image_url = crate::entities::image_url(record.image(), image_base);
    WithImage { record, image_url }
}

pub fn with_images<T: HasImage>(records: Vec<T>, image_base: &str) -> Vec<WithImage<T>> {
    records
        .into_iter()
        .map(|record| with_image(record, image_base))
        .collect()
}
