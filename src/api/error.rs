use reqwest::StatusCode;

/// Everything that can go wrong between issuing a request and holding a decoded envelope.
///
/// This never leaves the [`ApiClient`](super::ApiClient): it is rendered into the message of
/// an [`ApiResponse::Failure`](super::ApiResponse::Failure).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, CORS, ...).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    /// The body was not a valid response envelope.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope claimed success but had no payload.
    #[error("unexpected response: success without data")]
    MissingData,
}
