use thiserror::Error;

/// Failure of a single API call. No call is ever retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// 401. The token has already been purged and the login redirect issued.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// 404. Already logged by the client.
    #[error("endpoint not found: {url}")]
    NotFound { url: String, message: Option<String> },

    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Message supplied by the backend in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::NotFound { message, .. }
            | ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for the blocking alert: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pulls `message` (or `error`) out of a JSON error body.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
