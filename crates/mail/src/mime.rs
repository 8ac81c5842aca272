use std::fmt;

/// Top-level content type of a [`Message`](crate::Message).
///
/// Only the types a delivery method knows how to map get their own variant;
/// anything else is kept verbatim in [`MimeType::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MimeType {
    #[default]
    TextPlain,
    TextHtml,
    MultipartAlternative,
    MultipartMixed,
    MultipartRelated,
    Other(String),
}

impl MimeType {
    /// Parse a `Content-Type` value. Parameters (`; charset=...`) and case
    /// are ignored.
    pub fn parse(value: &str) -> Self {
        let essence = value
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/plain" => Self::TextPlain,
            "text/html" => Self::TextHtml,
            "multipart/alternative" => Self::MultipartAlternative,
            "multipart/mixed" => Self::MultipartMixed,
            "multipart/related" => Self::MultipartRelated,
            _ => Self::Other(essence),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::TextPlain => "text/plain",
            Self::TextHtml => "text/html",
            Self::MultipartAlternative => "multipart/alternative",
            Self::MultipartMixed => "multipart/mixed",
            Self::MultipartRelated => "multipart/related",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MimeType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_ignoring_params_and_case() {
        assert_eq!(MimeType::parse("text/plain"), MimeType::TextPlain);
        assert_eq!(
            MimeType::parse("Text/HTML; charset=utf-8"),
            MimeType::TextHtml
        );
        assert_eq!(
            MimeType::parse("multipart/alternative; boundary=\"b1\""),
            MimeType::MultipartAlternative
        );
        assert_eq!(MimeType::parse("multipart/mixed"), MimeType::MultipartMixed);
        assert_eq!(
            MimeType::parse("multipart/related"),
            MimeType::MultipartRelated
        );
    }

    #[test]
    fn unknown_types_are_kept() {
        let mime = MimeType::parse("application/pdf");
        assert_eq!(mime, MimeType::Other("application/pdf".into()));
        assert_eq!(mime.to_string(), "application/pdf");
    }
}
