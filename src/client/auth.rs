use serde::{Deserialize, Serialize};

use super::{handle_response, ApiClient, ClientResult};
use crate::entities::Staff;

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST auth/login` answers with the API token and the staff record,
/// the latter under `data` or `user`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(alias = "user")]
    pub data: Staff,
}

impl ApiClient {
    pub async fn login(&self, body: &LoginRequest) -> ClientResult<LoginResponse> {
        let response = self.http.post(self.url("auth/login")).json(body).send().await?;
        handle_response(response).await
    }
}
