use reqwest::{multipart::Form, Method};
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::entities::{Category, Extra, Product, Subcategory};

// Categories
impl ApiClient {
    pub async fn categories(&self, token: &str) -> ClientResult<Vec<Category>> {
        self.get_data("category", token).await
    }

    pub async fn category(&self, id: &str, token: &str) -> ClientResult<Category> {
        self.get_data(&format!("category/{id}"), token).await
    }

    pub async fn create_category(&self, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::POST, "category", form, token).await
    }

    pub async fn update_category(&self, id: &str, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::PUT, &format!("category/{id}"), form, token)
            .await
    }

    pub async fn delete_category(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("category/{id}"), token).await
    }
}

// Subcategories
impl ApiClient {
    pub async fn subcategories(&self, token: &str) -> ClientResult<Vec<Subcategory>> {
        self.get_data("subcategory/", token).await
    }

    pub async fn subcategories_of(&self, category_id: &str, token: &str) -> ClientResult<Vec<Subcategory>> {
        self.get_data(&format!("subcategory/category/{category_id}/"), token)
            .await
    }

    pub async fn subcategory(&self, id: &str, token: &str) -> ClientResult<Subcategory> {
        self.get_data(&format!("subcategory/{id}"), token).await
    }

    pub async fn create_subcategory(&self, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::POST, "subcategory/", form, token).await
    }

    pub async fn update_subcategory(&self, id: &str, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::PUT, &format!("subcategory/{id}"), form, token)
            .await
    }

    pub async fn delete_subcategory(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("subcategory/{id}"), token).await
    }
}

// Products
impl ApiClient {
    pub async fn products(&self, token: &str) -> ClientResult<Vec<Product>> {
        self.get_data("product/", token).await
    }

    pub async fn product(&self, id: &str, token: &str) -> ClientResult<Product> {
        self.get_data(&format!("product/{id}"), token).await
    }

    pub async fn products_of(&self, subcategory_id: &str, token: &str) -> ClientResult<Vec<Product>> {
        self.get_data(&format!("product/cat/{subcategory_id}"), token)
            .await
    }

    pub async fn create_product(&self, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::POST, "product", form, token).await
    }

    pub async fn update_product(&self, id: &str, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::PUT, &format!("product/{id}"), form, token)
            .await
    }

    pub async fn delete_product(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("product/{id}"), token).await
    }
}

// Product extras
impl ApiClient {
    pub async fn extras(&self, product_id: &str, token: &str) -> ClientResult<Vec<Extra>> {
        self.get_data(&format!("products/{product_id}/extras"), token)
            .await
    }

    pub async fn create_extra<B>(&self, product_id: &str, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, &format!("products/{product_id}/extras"), body, token)
            .await
    }

    pub async fn update_extra<B>(
        &self,
        product_id: &str,
        extra_id: &str,
        body: &B,
        token: &str,
    ) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(
            Method::PUT,
            &format!("products/{product_id}/extras/{extra_id}"),
            body,
            token,
        )
        .await
    }

    pub async fn delete_extra(&self, product_id: &str, extra_id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("products/{product_id}/extras/{extra_id}"), token)
            .await
    }
}
