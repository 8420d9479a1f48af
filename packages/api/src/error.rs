use thiserror::Error;

/// Failures surfaced by the client layer.
///
/// `Display` is the human-readable message views render next to the action
/// that triggered it, so the `Http` variant formats as the server-supplied
/// (or synthesized) message alone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A response arrived with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No response arrived: DNS failure, refused connection, aborted fetch.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A 2xx response whose body could not be decoded as the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// True when the server rejected the bearer token or credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_the_message_alone() {
        let err = ApiError::Http {
            status: 422,
            message: "The title field is required.".to_string(),
        };
        assert_eq!(err.to_string(), "The title field is required.");
    }

    #[test]
    fn test_unauthorized_detection() {
        let unauthorized = ApiError::Http {
            status: 401,
            message: "Unauthenticated.".to_string(),
        };
        assert!(unauthorized.is_unauthorized());

        let forbidden = ApiError::Http {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(!forbidden.is_unauthorized());
    }
}
