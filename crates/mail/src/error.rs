use thiserror::Error;

/// Errors raised while turning raw message bytes into a [`Message`](crate::Message).
#[derive(Debug, Error)]
pub enum MailError {
    /// The input is not a well-formed MIME message.
    #[error("failed to parse message: {0}")]
    Parse(#[from] mailparse::MailParseError),

    /// A body part could not be decoded with its declared transfer encoding.
    #[error("failed to decode {part} body: {reason}")]
    Body { part: String, reason: String },
}
