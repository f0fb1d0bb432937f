//! Backend error type.

use thiserror::Error;

/// Errors that can occur when talking to the external backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend rejected request with status {status}")]
    Rejected { status: u16 },

    /// A success response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BackendError {
    /// Message shown to the user after a failed add-customer submission.
    ///
    /// Transport failures read as a connectivity problem; anything the
    /// backend actually answered reads as a rejection.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(_) => "Error: Unable to connect to the server.",
            Self::Rejected { .. } | Self::Parse(_) => "Error: Could not add customer.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message() {
        let err = BackendError::Rejected { status: 400 };
        assert_eq!(err.user_message(), "Error: Could not add customer.");
        assert_eq!(
            err.to_string(),
            "Backend rejected request with status 400"
        );
    }

    #[test]
    fn test_parse_message() {
        let err = BackendError::Parse("expected array".to_string());
        assert_eq!(err.user_message(), "Error: Could not add customer.");
    }

    #[tokio::test]
    #[allow(clippy::unwrap_used)]
    async fn test_transport_message() {
        // Reserve a port, then close it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::Client::new()
            .get(format!("http://{addr}/"))
            .send()
            .await
            .map_err(BackendError::from)
            .unwrap_err();

        assert!(matches!(err, BackendError::Transport(_)));
        assert_eq!(err.user_message(), "Error: Unable to connect to the server.");
    }
}
