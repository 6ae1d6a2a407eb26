use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0}")]
    Network(String),
    #[error("Network response was not ok: {status_text}")]
    Status {
        status: u16,
        status_text: String,
        server_message: Option<String>,
    },
    #[error("Response parse error: {0}")]
    Parse(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Missing form field: {0}")]
    MissingField(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FormError {
    /// Message shown to the user, without the `Error: ` alert prefix.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            FormError::Status { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FormError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FormError::Config(err.to_string())
        } else if err.is_decode() {
            FormError::Parse(err.to_string())
        } else {
            FormError::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_uses_status_text() {
        let err = FormError::Status {
            status: 500,
            status_text: "Internal Server Error".into(),
            server_message: Some("Failed to load PSD file".into()),
        };
        assert_eq!(
            err.message(),
            "Network response was not ok: Internal Server Error"
        );
        assert_eq!(err.server_message(), Some("Failed to load PSD file"));
    }

    #[test]
    fn other_kinds_have_no_server_message() {
        let err = FormError::Parse("expected value at line 1 column 1".into());
        assert!(err.server_message().is_none());
        assert!(err.message().starts_with("Response parse error"));
    }
}
