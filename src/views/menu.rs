use serde::Deserialize;

use crate::entities::Product;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuQuery {
    pub category: Option<String>,
    pub title: Option<String>,
}

/// Keeps products of the given category whose title contains the query,
/// ignoring case. Blank filters match everything.
pub fn filter_products(products: Vec<Product>, category_id: Option<&str>, title: Option<&str>) -> Vec<Product> {
    let category_id = category_id.map(str::trim).filter(|id| !id.is_empty());
    let needle = title
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    products
        .into_iter()
        .filter(|product| category_id.map_or(true, |id| product.category_id() == Some(id)))
        .filter(|product| {
            needle
                .as_deref()
                .map_or(true, |needle| product.title.to_lowercase().contains(needle))
        })
        .collect()
}
