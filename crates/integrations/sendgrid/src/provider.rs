use courier_delivery::{DeliveryError, DeliveryMethod, DeliveryReceipt};
use courier_mail::Message;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::SendGridConfig;
use crate::error::SendGridError;
use crate::translate::MessageTranslator;
use crate::types::{SendGridMail, SendResult};

/// Delivery method that sends messages through the SendGrid v3 Mail Send API.
///
/// Holds one HTTP client, built at construction with the configured timeout
/// and reused for every send.
///
/// # Examples
///
/// ```no_run
/// use courier_mail::Message;
/// use courier_sendgrid::{SendGridConfig, SendGridDelivery};
///
/// # async fn run() -> Result<(), courier_sendgrid::SendGridError> {
/// let delivery = SendGridDelivery::new(SendGridConfig::new("SG.xxxx"))?;
/// let message = Message::new()
///     .from("noreply@example.com")
///     .to("user@example.com")
///     .subject("Welcome")
///     .text_body("Hello!");
/// let result = delivery.deliver_message(&message).await?;
/// assert_eq!(result.status_code, 202);
/// # Ok(())
/// # }
/// ```
pub struct SendGridDelivery {
    config: SendGridConfig,
    client: Client,
    translator: MessageTranslator,
}

impl std::fmt::Debug for SendGridDelivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridDelivery")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SendGridDelivery {
    /// Create a delivery method with a client using the configured timeout.
    pub fn new(config: SendGridConfig) -> Result<Self, SendGridError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(config, client))
    }

    /// Create a delivery method with a custom HTTP client.
    ///
    /// Useful for sharing a connection pool across delivery methods.
    pub fn with_client(config: SendGridConfig, client: Client) -> Self {
        Self {
            config,
            client,
            translator: MessageTranslator,
        }
    }

    pub fn config(&self) -> &SendGridConfig {
        &self.config
    }

    /// Translate `message` into a SendGrid payload without sending it.
    pub fn translate(&self, message: &Message) -> Result<SendGridMail, SendGridError> {
        self.translator.translate(message)
    }

    /// Translate and send `message`.
    #[instrument(skip(self, message), fields(subject = %message.subject))]
    pub async fn deliver_message(&self, message: &Message) -> Result<SendResult, SendGridError> {
        let payload = self.translate(message)?;
        self.send(&payload).await
    }

    /// Send a payload and classify the response.
    ///
    /// A failed delivery (see [`FailurePolicy`](crate::FailurePolicy)) is
    /// returned as [`SendGridError::DeliveryFailed`] when
    /// `raise_delivery_errors` is set; otherwise it is logged as a warning and
    /// the raw result is returned.
    pub async fn send(&self, payload: &SendGridMail) -> Result<SendResult, SendGridError> {
        let result = self.post(payload).await?;

        if let Some(err) = self.failure(&result) {
            if self.config.raise_delivery_errors {
                return Err(err);
            }
            warn!(status = result.status_code, "{err}");
        }

        Ok(result)
    }

    /// Describe `result` as a delivery failure, if it is one.
    pub fn failure(&self, result: &SendResult) -> Option<SendGridError> {
        self.config
            .failure_policy
            .is_failure(result.status_code)
            .then(|| SendGridError::DeliveryFailed {
                status: result.status_code,
                message: result.error_message(),
            })
    }

    async fn post(&self, payload: &SendGridMail) -> Result<SendResult, SendGridError> {
        let url = self.config.mail_send_url();
        let body = serde_json::to_vec(payload)?;

        debug!(
            url = %url,
            attachments = payload.attachments.len(),
            "sending mail via SendGrid"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let message_id = response
            .headers()
            .get("X-Message-Id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        debug!(status = status_code, "SendGrid responded");

        Ok(SendResult {
            status_code,
            body,
            message_id,
        })
    }
}

impl DeliveryMethod for SendGridDelivery {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "sendgrid"
    }

    async fn deliver(&self, message: &Message) -> Result<DeliveryReceipt, DeliveryError> {
        let result = self.deliver_message(message).await?;
        let warning = self.failure(&result).map(|e| e.to_string());

        if warning.is_none() {
            info!(
                status = result.status_code,
                message_id = result.message_id.as_deref().unwrap_or_default(),
                "mail accepted by SendGrid"
            );
        }

        Ok(DeliveryReceipt::new(result.status_code, result.body)
            .with_message_id(result.message_id)
            .with_warning(warning))
    }
}
