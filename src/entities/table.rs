use serde::{Deserialize, Serialize};

use super::{Record, Ref};

/// A dining area grouping tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Section {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Ref<Section>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Table {
    pub fn in_section(&self, section_id: &str) -> bool {
        self.section
            .as_ref()
            .is_some_and(|section| section.id() == section_id)
    }
}

impl Record for Table {
    fn id(&self) -> &str {
        &self.id
    }
}
