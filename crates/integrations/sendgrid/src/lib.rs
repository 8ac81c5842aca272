//! SendGrid delivery method for Courier.
//!
//! This crate implements the [`DeliveryMethod`](courier_delivery::DeliveryMethod)
//! trait, translating a [`Message`](courier_mail::Message) into a
//! [SendGrid v3 Mail Send](https://www.twilio.com/docs/sendgrid/api-reference/mail-send/mail-send)
//! request and classifying the response.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use courier_sendgrid::{SendGridConfig, SendGridDelivery};
//!
//! let config = SendGridConfig::new("SG.xxxx").with_raise_delivery_errors(true);
//! let delivery = SendGridDelivery::new(config).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod translate;
pub mod types;

pub use config::{FailurePolicy, SendGridConfig};
pub use error::SendGridError;
pub use provider::SendGridDelivery;
pub use translate::MessageTranslator;
pub use types::{SendGridMail, SendResult};
