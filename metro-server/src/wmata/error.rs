//! WMATA API error types.

/// Errors that can occur when interacting with the WMATA API.
#[derive(Debug, thiserror::Error)]
pub enum WmataError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check WMATA_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by WMATA API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock data operation failed
    #[error("mock data error: {message}")]
    Mock { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WmataError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check WMATA_API_KEY");

        let err = WmataError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = WmataError::Json {
            message: "expected string".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));
    }
}
