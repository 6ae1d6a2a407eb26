use crate::{
    error::{FormError, Result},
    models::HealthStatus,
};
use reqwest::{Client, Url};

#[derive(Clone)]
pub struct HealthClient {
    client: Client,
    url: Url,
}

impl HealthClient {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub async fn check(&self) -> Result<HealthStatus> {
        log::debug!("Checking service health at {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FormError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                server_message: None,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| FormError::Parse(e.to_string()))
    }
}
