use serde::{Deserialize, Serialize};

use super::ApiError;

/// The JSON shape every catalog endpoint answers with.
///
/// `{ "status": true, "data": ..., "message": "..." }` on success,
/// `{ "status": false, "message": "..." }` on failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// The result of a single API call.
///
/// Transport errors, bad statuses and malformed bodies all end up as [`ApiResponse::Failure`],
/// so callers only ever branch on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T, message: Option<String> },
    Failure { message: String },
}

impl<T> ApiResponse<T> {
    /// Interpret a decoded envelope. `fallback` is used when a failure carries no message.
    pub fn from_envelope(envelope: Envelope<T>, fallback: &str) -> Result<Self, ApiError> {
        match envelope {
            Envelope {
                status: true,
                data: Some(data),
                message,
            } => Ok(Self::Success { data, message }),
            Envelope {
                status: true,
                data: None,
                ..
            } => Err(ApiError::MissingData),
            Envelope {
                status: false,
                message,
                ..
            } => Ok(Self::Failure {
                message: message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            }),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// The server's message on success, or the error message on failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } => message.as_deref(),
            Self::Failure { message } => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { message } => Err(message),
        }
    }
}
