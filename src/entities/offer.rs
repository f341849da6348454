use serde::{Deserialize, Serialize};

use super::{ImageRef, Record};

/// A promotional image that is either shown to guests or not.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub is_active: bool,
}

impl Record for Offer {
    fn id(&self) -> &str {
        &self.id
    }
}
