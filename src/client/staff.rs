use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::entities::Staff;

impl ApiClient {
    pub async fn staff_members(&self, token: &str) -> ClientResult<Vec<Staff>> {
        self.get_data("staff", token).await
    }

    pub async fn staff_member(&self, id: &str, token: &str) -> ClientResult<Staff> {
        self.get_data(&format!("staff/{id}"), token).await
    }

    pub async fn create_staff<B>(&self, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, "staff", body, token).await
    }

    pub async fn update_staff<B>(&self, id: &str, body: &B, token: &str) -> ClientResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::PUT, &format!("staff/{id}"), body, token)
            .await
    }

    pub async fn delete_staff(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.remove(&format!("staff/{id}"), token).await
    }
}
