use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::entities::{Order, Section, Table};

// Sections
impl ApiClient {
    pub async fn sections(&self, token: &str) -> ClientResult<Vec<Section>> {
        self.get_data("section", token).await
    }

    pub async fn section(&self, id: &str, token: &str) -> ClientResult<Section> {
        self.get_data(&format!("section/{id}"), token).await
    }

    pub async fn create_section<B>(&self, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, "section", body, token).await
    }

    pub async fn update_section<B>(&self, id: &str, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, &format!("section/{id}"), body, token)
            .await
    }

    pub async fn delete_section(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("section/{id}"), token).await
    }
}

// Tables
impl ApiClient {
    pub async fn tables(&self, token: &str) -> ClientResult<Vec<Table>> {
        self.get_data("table", token).await
    }

    pub async fn tables_in(&self, section_id: &str, token: &str) -> ClientResult<Vec<Table>> {
        self.get_data(&format!("table/section/{section_id}"), token)
            .await
    }

    pub async fn table(&self, id: &str, token: &str) -> ClientResult<Table> {
        self.get_data(&format!("table/{id}"), token).await
    }

    pub async fn create_table<B>(&self, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, "table", body, token).await
    }

    pub async fn update_table<B>(&self, id: &str, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, &format!("table/{id}"), body, token)
            .await
    }

    pub async fn delete_table(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("table/{id}"), token).await
    }
}

// Orders
impl ApiClient {
    pub async fn orders(&self, token: &str) -> ClientResult<Vec<Order>> {
        self.get_data("order", token).await
    }

    pub async fn order(&self, id: &str, token: &str) -> ClientResult<Order> {
        self.get_data(&format!("order/{id}"), token).await
    }

    pub async fn create_order<B>(&self, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, "order", body, token).await
    }

    pub async fn update_order<B>(&self, id: &str, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PATCH, &format!("order/{id}"), body, token)
            .await
    }

    pub async fn delete_order(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("order/{id}"), token).await
    }
}
