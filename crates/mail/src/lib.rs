//! Mail-composition layer for Courier.
//!
//! Provides the in-memory [`Message`] that delivery methods consume, either
//! built in code or parsed from a raw RFC 5322 message.
//!
//! # Quick start
//!
//! ```
//! use courier_mail::{AttachmentPart, Message, MimeType};
//!
//! let message = Message::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Quarterly report")
//!     .text_body("See attached.")
//!     .attachment(AttachmentPart::new("report.pdf", "application/pdf", b"%PDF".to_vec()));
//!
//! assert_eq!(message.mime_type, MimeType::MultipartMixed);
//! ```

pub mod address;
pub mod attachment;
pub mod error;
pub mod message;
pub mod mime;
pub mod parse;

pub use address::{AddressError, AddressField, Mailbox};
pub use attachment::{AttachmentPart, Disposition};
pub use error::MailError;
pub use message::Message;
pub use mime::MimeType;
