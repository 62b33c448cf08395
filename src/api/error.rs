//! API Error Types
//!
//! Error classification for the HTTP client layer. Network failures,
//! non-2xx responses, and schema mismatches are distinct kinds; the store
//! renders whichever occurred into its shared error slot.

use thiserror::Error;

/// Errors surfaced by API requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response from the server
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds_render_distinct_messages() {
        assert_eq!(
            ApiError::Network("timeout".into()).to_string(),
            "network error: timeout"
        );
        assert_eq!(
            ApiError::Status {
                status: 404,
                message: "Patient not found".into()
            }
            .to_string(),
            "server error (404): Patient not found"
        );
        assert_eq!(
            ApiError::Decode("missing field `total_patients`".into()).to_string(),
            "malformed response: missing field `total_patients`"
        );
    }
}
