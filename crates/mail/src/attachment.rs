use std::fmt;

/// `Content-Disposition` type of an attachment part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
    Other(String),
}

impl Disposition {
    pub fn parse(value: &str) -> Self {
        let kind = value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match kind.as_str() {
            "inline" => Self::Inline,
            "attachment" => Self::Attachment,
            _ => Self::Other(kind),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Inline => "inline",
            Self::Attachment => "attachment",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file carried by a message, either attached or embedded inline.
#[derive(Clone, PartialEq, Eq)]
pub struct AttachmentPart {
    /// File name presented to the recipient.
    pub filename: String,

    /// MIME type of the content (e.g. `"application/pdf"`).
    pub mime_type: String,

    /// Decoded content bytes.
    pub content: Vec<u8>,

    /// Disposition, when the part declares one.
    pub disposition: Option<Disposition>,

    /// Content-ID without angle brackets, for parts referenced from HTML via
    /// `cid:`.
    pub content_id: Option<String>,
}

impl fmt::Debug for AttachmentPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachmentPart")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("disposition", &self.disposition)
            .field("content_id", &self.content_id)
            .finish()
    }
}

impl AttachmentPart {
    pub fn new(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            content: content.into(),
            disposition: None,
            content_id: None,
        }
    }

    #[must_use]
    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    /// Mark the part as an inline resource addressable as `cid:<content_id>`.
    #[must_use]
    pub fn inline(mut self, content_id: impl Into<String>) -> Self {
        self.disposition = Some(Disposition::Inline);
        self.content_id = Some(content_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_parse() {
        assert_eq!(Disposition::parse("inline"), Disposition::Inline);
        assert_eq!(
            Disposition::parse("Attachment; filename=\"a.pdf\""),
            Disposition::Attachment
        );
        assert_eq!(
            Disposition::parse("form-data"),
            Disposition::Other("form-data".into())
        );
    }

    #[test]
    fn inline_sets_disposition_and_content_id() {
        let part = AttachmentPart::new("logo.png", "image/png", vec![0x89, 0x50]).inline("logo");
        assert_eq!(part.disposition, Some(Disposition::Inline));
        assert_eq!(part.content_id.as_deref(), Some("logo"));
    }

    #[test]
    fn debug_hides_content() {
        let part = AttachmentPart::new("secret.txt", "text/plain", b"top secret".to_vec());
        let debug = format!("{part:?}");
        assert!(debug.contains("<10 bytes>"));
        assert!(!debug.contains("top secret"));
    }
}
