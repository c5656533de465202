use thiserror::Error;

pub const CONNECTION_FAILED_MESSAGE: &str =
    "Could not reach the recommendation service. Check your connection.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Server responded with status {status}")]
    Server { status: u16 },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    #[error("Request interrupted: {0}")]
    Interrupted(String),
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Network(_)
            | ApiError::Timeout(_)
            | ApiError::Endpoint(_)
            | ApiError::Interrupted(_) => CONNECTION_FAILED_MESSAGE,
            ApiError::Server { .. } | ApiError::Decode(_) => SERVER_ERROR_MESSAGE,
        }
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_)
                | ApiError::Timeout(_)
                | ApiError::Endpoint(_)
                | ApiError::Interrupted(_)
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_and_decode_share_the_server_message() {
        assert_eq!(
            ApiError::Server { status: 500 }.user_message(),
            SERVER_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::Decode("missing field".to_string()).user_message(),
            SERVER_ERROR_MESSAGE
        );
    }

    #[test]
    fn timeout_is_a_transport_failure() {
        let err = ApiError::Timeout("15s".to_string());
        assert!(err.is_transport());
        assert_eq!(err.user_message(), CONNECTION_FAILED_MESSAGE);
        assert!(!ApiError::Server { status: 502 }.is_transport());
    }

    #[test]
    fn interrupted_request_reads_as_connection_problem() {
        let err = ApiError::Interrupted("task panicked".to_string());
        assert!(err.is_transport());
        assert_eq!(err.user_message(), CONNECTION_FAILED_MESSAGE);
    }
}
