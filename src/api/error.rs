use std::fmt;

/// Errors that can occur while talking to the backend.
/// Variants carry enough info for the view layer to show a useful reason.
#[derive(Debug)]
pub enum ApiError {
    /// Client misconfigured (no base address resolvable). Raised before any
    /// network call is attempted.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The backend answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The response body does not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Unauthorized"));
    }

    #[test]
    fn test_display_is_never_empty() {
        let errors = [
            ApiError::Config("no base address".to_string()),
            ApiError::Network("connection refused".to_string()),
            ApiError::Api { status: 500, message: String::new() },
            ApiError::Decode("expected an array".to_string()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
