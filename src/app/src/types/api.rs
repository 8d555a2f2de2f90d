use serde::{Deserialize, Serialize};

/// `{message}` reply body used by the registry for submissions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Classified registry failure
///
/// Validation carries the registry's `message` body for 4xx rejections,
/// Server covers the remaining non-2xx statuses, Network covers transport
/// and malformed-body failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    Network { message: String },
    Validation { message: String },
    Server { status: u16, message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network { message } => write!(f, "{message}"),
            ApiError::Validation { message } => write!(f, "{message}"),
            ApiError::Server { status, message } => write!(f, "{message} (HTTP {status})"),
        }
    }
}
