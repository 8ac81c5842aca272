use courier_mail::Message;
use tracing::info;

use crate::error::DeliveryError;
use crate::method::DeliveryMethod;
use crate::receipt::DeliveryReceipt;

/// A delivery method that logs the message and reports success without
/// performing any external I/O.
///
/// Useful for local development and tests where no provider account is
/// available.
pub struct LogDelivery {
    name: String,
}

impl LogDelivery {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DeliveryMethod for LogDelivery {
    fn name(&self) -> &str {
        &self.name
    }

    #[allow(clippy::unused_async)]
    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
        info!(
            delivery = %self.name,
            subject = %message.subject,
            mime_type = %message.mime_type,
            attachments = message.attachments.len(),
            "log delivery accepted message"
        );
        Ok(DeliveryReceipt::new(200, String::new()))
    }
}
