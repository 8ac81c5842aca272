use mailparse::{MailHeader, MailHeaderMap, ParsedMail};

use crate::address::{AddressField, flatten};
use crate::attachment::{AttachmentPart, Disposition};
use crate::error::MailError;
use crate::message::Message;
use crate::mime::MimeType;

const FALLBACK_FILENAME: &str = "attachment";

impl Message {
    /// Parse a raw RFC 5322 message (e.g. the contents of an `.eml` file).
    ///
    /// Address headers are split before their encoded words are decoded, so a
    /// display name such as `=?UTF-8?Q?Doe=2C_Jane?=` stays one mailbox. A
    /// header that does not parse is kept as [`AddressField::Header`] and is
    /// reported by the delivery method when it resolves the field.
    ///
    /// For multipart messages the first `text/plain` and `text/html` parts
    /// that are not attachments become the text and HTML variants; every leaf
    /// part that is an attachment (or an inline non-text resource) becomes an
    /// [`AttachmentPart`].
    pub fn parse(raw: &[u8]) -> Result<Self, MailError> {
        let parsed = mailparse::parse_mail(raw)?;
        let headers = &parsed.headers;

        let address = |name: &str| {
            headers
                .get_first_header(name)
                .map_or(AddressField::Empty, address_field)
        };

        let mut message = Message {
            from: address("From"),
            reply_to: address("Reply-To"),
            to: address("To"),
            cc: address("Cc"),
            bcc: address("Bcc"),
            subject: headers.get_first_value("Subject").unwrap_or_default(),
            mime_type: MimeType::parse(&parsed.ctype.mimetype),
            ..Message::default()
        };

        if parsed.subparts.is_empty() {
            message.body = decode_text(&parsed)?;
        } else {
            walk(&parsed, &mut message)?;
        }

        Ok(message)
    }
}

fn address_field(header: &MailHeader<'_>) -> AddressField {
    match mailparse::addrparse_header(header) {
        Ok(list) => AddressField::from(flatten(&list)),
        Err(_) => AddressField::Header(header.get_value()),
    }
}

fn walk(part: &ParsedMail<'_>, message: &mut Message) -> Result<(), MailError> {
    if !part.subparts.is_empty() {
        for sub in &part.subparts {
            walk(sub, message)?;
        }
        return Ok(());
    }

    if let Some(attachment) = to_attachment(part)? {
        message.attachments.push(attachment);
        return Ok(());
    }

    match part.ctype.mimetype.to_ascii_lowercase().as_str() {
        "text/plain" if message.text_part.is_none() => {
            message.text_part = Some(decode_text(part)?);
        }
        "text/html" if message.html_part.is_none() => {
            message.html_part = Some(decode_text(part)?);
        }
        _ => {}
    }

    Ok(())
}

fn to_attachment(part: &ParsedMail<'_>) -> Result<Option<AttachmentPart>, MailError> {
    let mimetype = part.ctype.mimetype.to_ascii_lowercase();
    let content_disposition = part.get_content_disposition();

    let disposition = part
        .headers
        .get_first_value("Content-Disposition")
        .map(|value| Disposition::parse(&value));

    let content_id = part
        .headers
        .get_first_value("Content-ID")
        .map(|id| id.trim().trim_start_matches('<').trim_end_matches('>').to_owned())
        .filter(|id| !id.is_empty());

    let filename = content_disposition
        .params
        .get("filename")
        .or_else(|| part.ctype.params.get("name"))
        .cloned();

    let is_text = mimetype.starts_with("text/");
    let is_attachment = match disposition {
        Some(Disposition::Attachment) => true,
        Some(Disposition::Inline) => !is_text || filename.is_some(),
        _ => filename.is_some() || (content_id.is_some() && !is_text),
    };

    if !is_attachment {
        return Ok(None);
    }

    let content = part.get_body_raw().map_err(|e| MailError::Body {
        part: mimetype.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(AttachmentPart {
        filename: filename.unwrap_or_else(|| FALLBACK_FILENAME.to_owned()),
        mime_type: mimetype,
        content,
        disposition,
        content_id,
    }))
}

fn decode_text(part: &ParsedMail<'_>) -> Result<String, MailError> {
    part.get_body().map_err(|e| MailError::Body {
        part: part.ctype.mimetype.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Mailbox;

    const PLAIN: &[u8] = b"From: Sender <sender@example.com>\r\n\
To: a@example.com, \"Bee\" <b@example.com>\r\n\
Subject: Hello\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Plain body\r\n";

    const MIXED: &[u8] = b"From: sender@example.com\r\n\
To: rcpt@example.com\r\n\
Cc: cc@example.com\r\n\
Reply-To: replies@example.com\r\n\
Subject: Report\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"outer\"\r\n\
\r\n\
--outer\r\n\
Content-Type: multipart/alternative; boundary=\"inner\"\r\n\
\r\n\
--inner\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Text version\r\n\
--inner\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>HTML version</p>\r\n\
--inner--\r\n\
--outer\r\n\
Content-Type: application/pdf; name=\"report.pdf\"\r\n\
Content-Disposition: attachment; filename=\"report.pdf\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
JVBERi0xLjQ=\r\n\
--outer\r\n\
Content-Type: image/png\r\n\
Content-Disposition: inline\r\n\
Content-ID: <logo@example.com>\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
iVBORw==\r\n\
--outer--\r\n";

    #[test]
    fn parses_single_part_message() {
        let message = Message::parse(PLAIN).unwrap();
        assert_eq!(message.subject, "Hello");
        assert_eq!(message.mime_type, MimeType::TextPlain);
        assert_eq!(message.body.trim_end(), "Plain body");
        assert!(message.text_part.is_none());
        assert!(message.attachments.is_empty());
        assert!(message.cc.is_empty());
        assert_eq!(
            message.to.mailboxes().unwrap(),
            vec![
                Mailbox::new("a@example.com"),
                Mailbox::new("b@example.com").with_name("Bee"),
            ]
        );
        assert_eq!(
            message.from.first().unwrap(),
            Some(Mailbox::new("sender@example.com").with_name("Sender"))
        );
    }

    #[test]
    fn parses_multipart_bodies_and_attachments() {
        let message = Message::parse(MIXED).unwrap();
        assert_eq!(message.mime_type, MimeType::MultipartMixed);
        assert_eq!(
            message.text_part.as_deref().map(str::trim_end),
            Some("Text version")
        );
        assert_eq!(
            message.html_part.as_deref().map(str::trim_end),
            Some("<p>HTML version</p>")
        );
        assert_eq!(
            message.reply_to,
            AddressField::List(vec![Mailbox::new("replies@example.com")])
        );

        assert_eq!(message.attachments.len(), 2);

        let pdf = &message.attachments[0];
        assert_eq!(pdf.filename, "report.pdf");
        assert_eq!(pdf.mime_type, "application/pdf");
        assert_eq!(pdf.content, b"%PDF-1.4");
        assert_eq!(pdf.disposition, Some(Disposition::Attachment));
        assert!(pdf.content_id.is_none());

        let logo = &message.attachments[1];
        assert_eq!(logo.filename, FALLBACK_FILENAME);
        assert_eq!(logo.mime_type, "image/png");
        assert_eq!(logo.content, vec![0x89, b'P', b'N', b'G']);
        assert_eq!(logo.disposition, Some(Disposition::Inline));
        assert_eq!(logo.content_id.as_deref(), Some("logo@example.com"));
    }

    #[test]
    fn missing_address_headers_are_empty() {
        let raw = b"Subject: none\r\n\r\nbody\r\n";
        let message = Message::parse(raw).unwrap();
        assert_eq!(message.from, AddressField::Empty);
        assert_eq!(message.to, AddressField::Empty);
        assert_eq!(message.mime_type, MimeType::TextPlain);
    }

    #[test]
    fn encoded_display_names_with_commas_stay_whole() {
        let raw = b"From: =?UTF-8?Q?Doe=2C_Jane?= <jane@example.com>\r\n\
To: =?UTF-8?Q?Smith=2C_Bob?= <bob@example.com>, ops@example.com\r\n\
Subject: Names\r\n\
\r\n\
body\r\n";
        let message = Message::parse(raw).unwrap();

        assert_eq!(
            message.from.first().unwrap(),
            Some(Mailbox::new("jane@example.com").with_name("Doe, Jane"))
        );
        assert_eq!(
            message.to.mailboxes().unwrap(),
            vec![
                Mailbox::new("bob@example.com").with_name("Smith, Bob"),
                Mailbox::new("ops@example.com"),
            ]
        );
    }

    #[test]
    fn unparseable_address_header_is_kept_raw() {
        let raw = b"From: <broken\r\nSubject: x\r\n\r\nbody\r\n";
        let message = Message::parse(raw).unwrap();
        assert!(matches!(message.from, AddressField::Header(ref v) if v == "<broken"));
        assert!(message.from.mailboxes().is_err());
    }
}
