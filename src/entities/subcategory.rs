use serde::{Deserialize, Serialize};

use super::{Category, ImageRef, Record, Ref};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Ref<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_count: Option<u32>,
}

impl Subcategory {
    pub fn belongs_to(&self, category_id: &str) -> bool {
        self.category
            .as_ref()
            .is_some_and(|category| category.id() == category_id)
    }
}

impl Record for Subcategory {
    fn id(&self) -> &str {
        &self.id
    }
}
