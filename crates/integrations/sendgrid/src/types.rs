use serde::{Deserialize, Serialize};

/// Request body for the SendGrid v3 Mail Send API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendGridMail {
    /// Recipient groupings. Always exactly one entry.
    pub personalizations: Vec<Personalization>,

    pub from: EmailAddress,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,

    pub subject: String,

    /// Body variants, plain text first.
    pub content: Vec<Content>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// To/cc/bcc lists for one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    #[serde(default)]
    pub to: Vec<EmailAddress>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailAddress>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A single body variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// `text/plain` or `text/html`.
    #[serde(rename = "type")]
    pub content_type: String,

    pub value: String,
}

impl Content {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            content_type: "text/plain".to_owned(),
            value: value.into(),
        }
    }

    pub fn html(value: impl Into<String>) -> Self {
        Self {
            content_type: "text/html".to_owned(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64-encoded file content.
    pub content: String,

    #[serde(rename = "type")]
    pub content_type: String,

    pub filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

/// Error body returned by SendGrid on rejected requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: Option<String>,
}

/// Raw outcome of a Mail Send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub status_code: u16,

    /// Response body as returned by SendGrid (empty on 202).
    pub body: String,

    /// Value of the `X-Message-Id` response header.
    pub message_id: Option<String>,
}

impl SendResult {
    /// The error description SendGrid gave for this response.
    ///
    /// Uses the `message` of the last entry in the `errors` list, falling back
    /// to the raw body when it is not a SendGrid error document.
    pub fn error_message(&self) -> String {
        serde_json::from_str::<ErrorResponse>(&self.body)
            .ok()
            .and_then(|resp| resp.errors.into_iter().next_back())
            .and_then(|err| err.message)
            .unwrap_or_else(|| self.body.trim().to_owned())
    }
}
