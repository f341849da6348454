use serde::{Deserialize, Serialize};

use super::{
    embedded_list, lenient_f64, lenient_opt_f64, string_list, Category, ImageRef, Record, Ref,
    Subcategory,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "lenient_opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_after_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Ref<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<Ref<Subcategory>>,
    #[serde(default, deserialize_with = "string_list")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "embedded_list")]
    pub extras: Vec<Extra>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Product {
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.id())
    }

    pub fn has_image(&self) -> bool {
        self.image
            .as_ref()
            .is_some_and(|image| !image.filename().is_empty())
    }
}

impl Record for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A paid add-on offered with a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
}
