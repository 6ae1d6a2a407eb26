use crate::error::{FormError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://bam.alhajmee.com/generate-image";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: Some(format!("bannergen/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = env::var("BANNERGEN_ENDPOINT") {
            if !endpoint.trim().is_empty() {
                config.endpoint = endpoint.trim().to_string();
            }
        }
        if let Some(secs) = env::var("BANNERGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// A zero timeout means no timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn endpoint_url(&self) -> Result<reqwest::Url> {
        reqwest::Url::parse(&self.endpoint)
            .map_err(|e| FormError::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))
    }

    /// `/health` on the same host as the generation endpoint.
    pub fn health_url(&self) -> Result<reqwest::Url> {
        self.endpoint_url()?
            .join("/health")
            .map_err(|e| FormError::Config(e.to_string()))
    }
}
