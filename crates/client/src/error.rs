use crate::transport::TransportError;

/// Generic toast text for transport failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Toast text once the single rate-limit retry has failed too.
pub const SERVER_BUSY_MESSAGE: &str = "Server is busy. Please try again later.";

/// Errors surfaced by the client layer and resource services.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received (timeout, connection failure).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered 401; the stored session has been wiped and the
    /// app sent to `/login`.
    #[error("Session expired")]
    SessionExpired,

    /// The backend answered 429 and the single delayed retry failed too.
    #[error("Server is busy")]
    ServerBusy,

    /// The backend answered with a non-2xx status other than 401/429.
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The envelope reported `success: false`.
    #[error("{message}")]
    Rejected {
        message: String,
        code: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The call was rejected before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ApiError {
    /// Text suitable for an error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            Self::ServerBusy => SERVER_BUSY_MESSAGE.to_string(),
            Self::Status { message, .. } | Self::Rejected { message, .. } => message.clone(),
            Self::Decode(_) => "Unexpected response from server.".to_string(),
            Self::InvalidInput(message) => message.clone(),
        }
    }

    /// Whether the error means the requested entity does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 404,
            Self::Rejected { code, .. } => code.as_deref() == Some("NOT_FOUND"),
            _ => false,
        }
    }

    /// Whether the session was ended by this error.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            ApiError::Transport(TransportError::Timeout).user_message(),
            NETWORK_ERROR_MESSAGE
        );
        assert_eq!(ApiError::ServerBusy.user_message(), SERVER_BUSY_MESSAGE);
        let rejected = ApiError::Rejected {
            message: "Trainer not available".into(),
            code: None,
        };
        assert_eq!(rejected.user_message(), "Trainer not available");
        assert_eq!(rejected.to_string(), "Trainer not available");
    }

    #[test]
    fn not_found_detection() {
        assert!(ApiError::Status {
            status: 404,
            message: "FAQ not found".into()
        }
        .is_not_found());
        assert!(ApiError::Rejected {
            message: "missing".into(),
            code: Some("NOT_FOUND".into())
        }
        .is_not_found());
        assert!(!ApiError::ServerBusy.is_not_found());
    }

    #[test]
    fn status_display() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Request failed (500): boom");
    }
}
