use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient_f64, Record};

/// Guest feedback. `rate` is the overall score on a 1..=5 scale; any
/// sub-ratings the backend adds are carried through untouched in `details`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Review {
    pub fn is_positive(&self) -> bool {
        self.rate >= 4.0
    }
}

impl Record for Review {
    fn id(&self) -> &str {
        &self.id
    }
}
