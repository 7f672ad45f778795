use thiserror::Error;

/// Errors that can occur when talking to the remote service.
///
/// All variants surface to the user as a page-level load failure; none are
/// retried and none are fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout, broken body).
    #[error("Request to {path} failed: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    /// The response body was not the JSON shape we expected.
    #[error("Could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Resource path the failed request was issued for.
    pub fn path(&self) -> &str {
        match self {
            ApiError::Network { path, .. }
            | ApiError::Status { path, .. }
            | ApiError::Decode { path, .. } => path,
        }
    }
}
