use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequest {
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub background_url: String,
    pub keywords: Vec<String>,
}

impl ImageRequest {
    /// Builds a request from raw field values, splitting `keywords` on commas.
    pub fn from_fields(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        category: impl Into<String>,
        background_url: impl Into<String>,
        keywords: &str,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            category: category.into(),
            background_url: background_url.into(),
            keywords: split_keywords(keywords),
        }
    }
}

/// Splits on `,` and trims each piece. Empty pieces are kept, so the result
/// always has `count(',') + 1` entries.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(|k| k.trim().to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    pub image_url: String,
}

impl ImageResponse {
    /// Decodes a response body, separating malformed JSON from a JSON value
    /// that lacks a string `image_url`.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| FormError::Parse(e.to_string()))?;

        match value.get("image_url") {
            Some(serde_json::Value::String(url)) => Ok(Self {
                image_url: url.clone(),
            }),
            Some(other) => Err(FormError::InvalidResponse(format!(
                "image_url is not a string: {}",
                other
            ))),
            None => Err(FormError::InvalidResponse(
                "response has no image_url field".into(),
            )),
        }
    }
}

/// Error body the generation service sends with 4xx/5xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerError {
    pub error: String,
}

impl ServerError {
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
