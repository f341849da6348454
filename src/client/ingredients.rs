use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::entities::Ingredient;

impl ApiClient {
    pub async fn ingredients(&self, token: &str) -> ClientResult<Vec<Ingredient>> {
        self.get_data("ingredients", token).await
    }

    pub async fn ingredient(&self, id: &str, token: &str) -> ClientResult<Ingredient> {
        self.get_data(&format!("ingredients/{id}"), token).await
    }

    pub async fn create_ingredient<B>(&self, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, "ingredients", body, token).await
    }

    pub async fn update_ingredient<B>(&self, id: &str, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, &format!("ingredients/{id}"), body, token)
            .await
    }

    pub async fn delete_ingredient(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("ingredients/{id}"), token).await
    }
}
