use crate::{
    error::{FormError, Result},
    models::{ImageRequest, ImageResponse, ServerError},
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Url};

/// Anything that can turn an [`ImageRequest`] into an image URL.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &ImageRequest) -> Result<ImageResponse>;
}

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: Url,
}

impl ImageClient {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: &ImageRequest) -> Result<ImageResponse> {
        let body = serde_json::to_vec(request)
            .map_err(|e| FormError::Serialization(e.to_string()))?;

        log::info!(
            "Requesting image for '{}' ({} keywords)",
            request.title,
            request.keywords.len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The error body only adds detail; a failed read keeps the status error.
            let server_message = response
                .text()
                .await
                .ok()
                .and_then(|body| ServerError::from_body(&body))
                .map(|e| e.error);
            return Err(FormError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                server_message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;
        ImageResponse::from_body(&text)
    }
}
