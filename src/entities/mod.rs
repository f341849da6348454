pub mod category;
pub mod ingredient;
pub mod offer;
pub mod order;
pub mod product;
pub mod review;
pub mod staff;
pub mod subcategory;
pub mod table;

pub use category::Category;
pub use ingredient::Ingredient;
pub use offer::Offer;
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{Extra, Product};
pub use review::Review;
pub use staff::{Role, Staff};
pub use subcategory::Subcategory;
pub use table::{Section, Table};

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Anything the remote API identifies by `_id`.
pub trait Record {
    fn id(&self) -> &str;
}

/// The remote API answers either `{ "data": ... }` or the bare payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}

/// A relation that arrives either as an id or as the populated document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Populated(T),
}

impl<T: Record> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) => id,
            Ref::Populated(record) => record.id(),
        }
    }
}

/// Images are served from the uploads path and referenced by filename.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Name(String),
    File { filename: String },
}

impl ImageRef {
    pub fn filename(&self) -> &str {
        match self {
            ImageRef::Name(name) => name,
            ImageRef::File { filename } => filename,
        }
    }

    pub fn url(&self, image_base: &str) -> String {
        format!("{}{}", image_base, self.filename())
    }
}

pub(crate) fn image_url(image: &Option<ImageRef>, image_base: &str) -> Option<String> {
    image
        .as_ref()
        .filter(|image| !image.filename().is_empty())
        .map(|image| image.url(image_base))
}

/// Accepts a list, a JSON-encoded list, a one-element list wrapping a
/// JSON-encoded list, or a single plain string.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(match value {
        Value::Null => Vec::new(),
        Value::String(text) => parse_string_list(&text),
        Value::Array(items) => {
            if let [Value::String(only)] = items.as_slice() {
                if let Some(list) = parse_encoded_list(only) {
                    return Ok(list);
                }
            }
            items.into_iter().map(list_item).collect()
        }
        other => vec![list_item(other)],
    })
}

/// A JSON-encoded list, or the whole text as a single entry.
pub(crate) fn parse_string_list(text: &str) -> Vec<String> {
    let text = text.trim();
    match parse_encoded_list(text) {
        Some(list) => list,
        None if text.is_empty() => Vec::new(),
        None => vec![text.to_owned()],
    }
}

fn parse_encoded_list(text: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Array(items) => Some(items.into_iter().map(list_item).collect()),
        _ => None,
    }
}

fn list_item(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Object(ref map) => match map.get("name").or_else(|| map.get("title")) {
            Some(Value::String(name)) => name.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Accepts an array or a JSON-encoded array; an unparsable string is an empty list.
pub(crate) fn embedded_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(text) => Ok(serde_json::from_str::<Vec<T>>(&text).unwrap_or_default()),
        array @ Value::Array(_) => serde_json::from_value(array).map_err(de::Error::custom),
        other => Err(de::Error::custom(format!("expected a list, got {other}"))),
    }
}

/// Numbers that may arrive as strings; anything unreadable counts as zero.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or(0.0))
}

pub(crate) fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}
