use crate::address::AddressField;
use crate::attachment::AttachmentPart;
use crate::mime::MimeType;

/// An outgoing email as produced by the composition layer.
///
/// Fields are public so host code can assemble a message directly; the
/// chained setters below keep [`Message::mime_type`] in step with the body
/// parts and attachments they add.
///
/// For single-part messages the decoded content lives in [`Message::body`].
/// For multipart messages the text and HTML variants live in
/// [`Message::text_part`] and [`Message::html_part`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub from: AddressField,
    pub reply_to: AddressField,
    pub to: AddressField,
    pub cc: AddressField,
    pub bcc: AddressField,
    pub subject: String,
    pub mime_type: MimeType,
    pub body: String,
    pub text_part: Option<String>,
    pub html_part: Option<String>,
    pub attachments: Vec<AttachmentPart>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from(mut self, from: impl Into<AddressField>) -> Self {
        self.from = from.into();
        self
    }

    #[must_use]
    pub fn reply_to(mut self, reply_to: impl Into<AddressField>) -> Self {
        self.reply_to = reply_to.into();
        self
    }

    #[must_use]
    pub fn to(mut self, to: impl Into<AddressField>) -> Self {
        self.to = to.into();
        self
    }

    #[must_use]
    pub fn cc(mut self, cc: impl Into<AddressField>) -> Self {
        self.cc = cc.into();
        self
    }

    #[must_use]
    pub fn bcc(mut self, bcc: impl Into<AddressField>) -> Self {
        self.bcc = bcc.into();
        self
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    #[must_use]
    pub fn text_body(mut self, text: impl Into<String>) -> Self {
        self.text_part = Some(text.into());
        self.sync_mime_type();
        self
    }

    #[must_use]
    pub fn html_body(mut self, html: impl Into<String>) -> Self {
        self.html_part = Some(html.into());
        self.sync_mime_type();
        self
    }

    #[must_use]
    pub fn attachment(mut self, part: AttachmentPart) -> Self {
        self.attachments.push(part);
        self.sync_mime_type();
        self
    }

    /// Override the derived content type. Call after the body setters, which
    /// re-derive it.
    #[must_use]
    pub fn mime_type(mut self, mime_type: impl Into<MimeType>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Recompute `mime_type` (and `body` for single-part messages) from the
    /// parts currently set.
    fn sync_mime_type(&mut self) {
        self.mime_type = match (&self.text_part, &self.html_part) {
            _ if !self.attachments.is_empty() => MimeType::MultipartMixed,
            (Some(_), Some(_)) => MimeType::MultipartAlternative,
            (None, Some(html)) => {
                self.body.clone_from(html);
                MimeType::TextHtml
            }
            (Some(text), None) => {
                self.body.clone_from(text);
                MimeType::TextPlain
            }
            (None, None) => MimeType::TextPlain,
        };
    }
}
