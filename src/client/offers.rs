use reqwest::{multipart::Form, Method};
use serde_json::Value;

use super::{ApiClient, ClientResult};
use crate::entities::{Offer, Review};

impl ApiClient {
    pub async fn offers(&self, token: &str) -> ClientResult<Vec<Offer>> {
        self.get_data("offers", token).await
    }

    pub async fn offer(&self, id: &str, token: &str) -> ClientResult<Offer> {
        self.get_data(&format!("offers/{id}"), token).await
    }

    pub async fn create_offer(&self, form: Form, token: &str) -> ClientResult<Value> {
        self.send_form(Method::POST, "offers", form, token).await
    }

    pub async fn activate_offer(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.send_empty(Method::PATCH, &format!("offers/active/{id}"), token)
            .await
    }

    pub async fn deactivate_offer(&self, id: &str, token: &str) -> ClientResult<Value> {
        self.send_empty(Method::PATCH, &format!("offers/deActive/{id}"), token)
            .await
    }

    pub async fn reviews(&self, token: &str) -> ClientResult<Vec<Review>> {
        self.get_data("review", token).await
    }
}
