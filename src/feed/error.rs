use thiserror::Error;

/// Errors that can occur while fetching the category feed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No HTTP response arrived (DNS, connect, TLS, timeout).
    #[error("Could not reach the server: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but could not be read.
    #[error("Invalid response from the server")]
    InvalidResponse,

    /// Status outside 200..=299.
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },

    /// Body is not a valid category list.
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl FetchError {
    /// Short machine-readable kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::InvalidResponse => "invalid_response",
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Decoding(_) => "decoding",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            FetchError::HttpStatus { status: 404 }.to_string(),
            "HTTP error: 404"
        );
        assert_eq!(
            FetchError::InvalidResponse.to_string(),
            "Invalid response from the server"
        );
        let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(FetchError::Decoding(decode)
            .to_string()
            .starts_with("Failed to decode response: "));
    }

    #[test]
    fn kinds() {
        assert_eq!(FetchError::InvalidResponse.kind(), "invalid_response");
        assert_eq!(FetchError::HttpStatus { status: 500 }.kind(), "http_status");
    }
}
