use thiserror::Error;

/// Errors that can occur while delivering a message.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The message cannot be mapped onto the delivery method's request
    /// format (bad address, unsupported content type, no body).
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The remote service refused the message.
    #[error("delivery rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// A network or transport-level error occurred.
    #[error("transport error: {0}")]
    Transport(String),

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DeliveryError {
    /// Returns `true` if the error is transient and the delivery may succeed
    /// on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transport_is_retryable() {
        assert!(DeliveryError::Transport("reset".into()).is_retryable());
        assert!(!DeliveryError::InvalidMessage("x".into()).is_retryable());
        assert!(
            !DeliveryError::Rejected {
                status: 400,
                message: "x".into()
            }
            .is_retryable()
        );
        assert!(!DeliveryError::Serialization("x".into()).is_retryable());
    }

    #[test]
    fn error_display() {
        let err = DeliveryError::Rejected {
            status: 403,
            message: "forbidden".into(),
        };
        assert_eq!(
            err.to_string(),
            "delivery rejected with status 403: forbidden"
        );

        let err = DeliveryError::InvalidMessage("no recipients".into());
        assert_eq!(err.to_string(), "invalid message: no recipients");
    }
}
