use serde::Serialize;

use super::{with_image, with_images, WithImage};
use crate::entities::{Category, Product, Subcategory};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetails {
    pub category: WithImage<Category>,
    pub subcategories: Vec<WithImage<Subcategory>>,
    pub subcategory_count: usize,
}

impl CategoryDetails {
    /// Subcategories not tied to `category` are dropped; the remote list
    /// endpoint does not always filter by itself.
    pub fn new(category: Category, subcategories: Vec<Subcategory>, image_base: &str) -> CategoryDetails {
        let subcategories: Vec<Subcategory> = subcategories
            .into_iter()
            .filter(|sub| sub.category.is_none() || sub.belongs_to(&category.id))
            .collect();
        CategoryDetails {
            subcategory_count: subcategories.len(),
            subcategories: with_images(subcategories, image_base),
            category: with_image(category, image_base),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDetails {
    pub subcategory: WithImage<Subcategory>,
    pub products: Vec<WithImage<Product>>,
    pub product_count: usize,
}

impl SubcategoryDetails {
    pub fn new(subcategory: Subcategory, products: Vec<Product>, image_base: &str) -> SubcategoryDetails {
        SubcategoryDetails {
            product_count: products.len(),
            products: with_images(products, image_base),
            subcategory: with_image(subcategory, image_base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Ref;

    fn subcategory(id: &str, category: &str) -> Subcategory {
        Subcategory {
            id: id.into(),
            title: id.into(),
            description: None,
            image: None,
            category: Some(Ref::Id(category.into())),
            product_count: None,
        }
    }

    #[test]
    fn details_only_list_own_subcategories() {
        let category = Category {
            id: "drinks".into(),
            title: "Drinks".into(),
            description: None,
            image: None,
        };
        let details = CategoryDetails::new(
            category,
            vec![subcategory("hot", "drinks"), subcategory("cake", "desserts")],
            "http://host/",
        );
        assert_eq!(details.subcategory_count, 1);
        assert_eq!(details.subcategories[0].record.id, "hot");
    }
}
