use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use courier_mail::{AddressField, AttachmentPart, Message, MimeType};

use crate::error::SendGridError;
use crate::types::{Attachment, Content, EmailAddress, Personalization, SendGridMail};

/// Maps a [`Message`] onto a SendGrid Mail Send payload.
///
/// Translation is pure: no I/O, and the same message always yields the same
/// payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageTranslator;

impl MessageTranslator {
    pub fn translate(self, message: &Message) -> Result<SendGridMail, SendGridError> {
        let from = to_email("from", &message.from)?.ok_or_else(|| {
            SendGridError::InvalidAddressField {
                field: "from",
                reason: "no sender address".into(),
            }
        })?;

        let personalization = Personalization {
            to: to_emails("to", &message.to)?,
            cc: to_emails("cc", &message.cc)?,
            bcc: to_emails("bcc", &message.bcc)?,
        };

        let (content, attachments) = to_content(message)?;
        if content.is_empty() {
            return Err(SendGridError::MissingContent);
        }

        Ok(SendGridMail {
            personalizations: vec![personalization],
            from,
            reply_to: to_email("reply_to", &message.reply_to)?,
            subject: message.subject.clone(),
            content,
            attachments,
        })
    }
}

/// Resolve an address field into SendGrid email objects, in header order.
pub fn to_emails(
    field_name: &'static str,
    field: &AddressField,
) -> Result<Vec<EmailAddress>, SendGridError> {
    let mailboxes = field
        .mailboxes()
        .map_err(|e| SendGridError::InvalidAddressField {
            field: field_name,
            reason: e.to_string(),
        })?;

    Ok(mailboxes
        .into_iter()
        .map(|m| EmailAddress {
            email: m.email,
            name: m.name,
        })
        .collect())
}

fn to_email(
    field_name: &'static str,
    field: &AddressField,
) -> Result<Option<EmailAddress>, SendGridError> {
    Ok(to_emails(field_name, field)?.into_iter().next())
}

fn to_content(message: &Message) -> Result<(Vec<Content>, Vec<Attachment>), SendGridError> {
    match &message.mime_type {
        MimeType::TextPlain => Ok((vec![Content::plain(&message.body)], Vec::new())),
        MimeType::TextHtml => Ok((vec![Content::html(&message.body)], Vec::new())),
        MimeType::MultipartAlternative | MimeType::MultipartMixed | MimeType::MultipartRelated => {
            let mut content = Vec::with_capacity(2);
            if let Some(text) = &message.text_part {
                content.push(Content::plain(text));
            }
            if let Some(html) = &message.html_part {
                content.push(Content::html(html));
            }
            let attachments = message.attachments.iter().map(to_attachment).collect();
            Ok((content, attachments))
        }
        MimeType::Other(other) => Err(SendGridError::UnsupportedContentType(other.clone())),
    }
}

/// Encode one attachment part. Disposition and content-id are only carried
/// when the part declares them.
pub fn to_attachment(part: &AttachmentPart) -> Attachment {
    Attachment {
        content: STANDARD.encode(&part.content),
        content_type: part.mime_type.clone(),
        filename: part.filename.clone(),
        disposition: part.disposition.as_ref().map(|d| d.as_str().to_owned()),
        content_id: part.content_id.clone(),
    }
}
