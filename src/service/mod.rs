pub mod health_client;
pub mod image_client;

use crate::{
    config::ClientConfig,
    error::{FormError, Result},
};
use reqwest::Client;

pub use health_client::HealthClient;
pub use image_client::{ImageClient, ImageGenerator};

/// One HTTP connection pool shared by the generation and health clients.
#[derive(Clone)]
pub struct ServiceClient {
    image_client: ImageClient,
    health_client: HealthClient,
}

impl ServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let health_url = config.health_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| FormError::Config(format!("failed to build HTTP client: {}", e)))?;

        log::debug!("Service client ready for {}", endpoint);

        Ok(Self {
            image_client: ImageClient::new(client.clone(), endpoint),
            health_client: HealthClient::new(client, health_url),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn health(&self) -> &HealthClient {
        &self.health_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_endpoint() {
        let result = ServiceClient::new(ClientConfig::new().with_endpoint("::nope::"));
        assert!(matches!(result, Err(FormError::Config(_))));
    }

    #[test]
    fn exposes_configured_endpoint() {
        let client =
            ServiceClient::new(ClientConfig::new().with_endpoint("http://127.0.0.1:9/generate-image"))
                .unwrap();
        assert_eq!(
            client.image().endpoint().as_str(),
            "http://127.0.0.1:9/generate-image"
        );
    }
}
