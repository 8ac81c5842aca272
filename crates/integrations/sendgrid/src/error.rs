use courier_delivery::DeliveryError;
use thiserror::Error;

/// Errors specific to the SendGrid delivery method.
///
/// These are converted into [`DeliveryError`] at the delivery-method
/// boundary.
#[derive(Debug, Error)]
pub enum SendGridError {
    /// An HTTP-level transport error occurred.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An address header could not be turned into SendGrid email objects.
    #[error("invalid {field} address: {reason}")]
    InvalidAddressField { field: &'static str, reason: String },

    /// The message's top-level content type has no SendGrid mapping.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// Translation produced no content block; SendGrid rejects such payloads.
    #[error("message has no text or HTML content")]
    MissingContent,

    /// SendGrid refused the message.
    #[error("SendGrid delivery failed with {status} {message}")]
    DeliveryFailed { status: u16, message: String },

    /// The payload could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<SendGridError> for DeliveryError {
    fn from(err: SendGridError) -> Self {
        match err {
            SendGridError::Http(e) => DeliveryError::Transport(e.to_string()),
            e @ (SendGridError::InvalidAddressField { .. }
            | SendGridError::UnsupportedContentType(_)
            | SendGridError::MissingContent) => DeliveryError::InvalidMessage(e.to_string()),
            SendGridError::DeliveryFailed { status, message } => {
                DeliveryError::Rejected { status, message }
            }
            SendGridError::Serialization(e) => DeliveryError::Serialization(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_failed_display() {
        let err = SendGridError::DeliveryFailed {
            status: 400,
            message: "invalid sender".into(),
        };
        assert_eq!(
            err.to_string(),
            "SendGrid delivery failed with 400 invalid sender"
        );
    }

    #[test]
    fn delivery_failed_maps_to_rejected() {
        let err: DeliveryError = SendGridError::DeliveryFailed {
            status: 403,
            message: "forbidden".into(),
        }
        .into();
        assert!(matches!(err, DeliveryError::Rejected { status: 403, .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn translation_errors_map_to_invalid_message() {
        let err: DeliveryError = SendGridError::UnsupportedContentType("application/pdf".into())
            .into();
        assert!(matches!(err, DeliveryError::InvalidMessage(ref m) if m.contains("application/pdf")));

        let err: DeliveryError = SendGridError::InvalidAddressField {
            field: "to",
            reason: "address is blank".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid message: invalid to address: address is blank"
        );

        let err: DeliveryError = SendGridError::MissingContent.into();
        assert!(matches!(err, DeliveryError::InvalidMessage(_)));
    }
}
