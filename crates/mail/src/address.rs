use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single email address with an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    /// Bare address, e.g. `jane@example.com`.
    pub email: String,

    /// Display name, e.g. `Jane Doe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<&str> for Mailbox {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

/// An address-bearing header (`From`, `To`, `Cc`, ...) as handed over by the
/// composition layer.
///
/// The shape is decided when the message is built, so delivery methods never
/// have to inspect values at runtime to find out what they are holding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddressField {
    /// The header is absent.
    #[default]
    Empty,

    /// A single bare address, used verbatim.
    Plain(String),

    /// Already-structured mailboxes, in header order.
    List(Vec<Mailbox>),

    /// An unparsed RFC 5322 address-list header value, e.g.
    /// `"Jane Doe" <jane@example.com>, ops@example.com`.
    Header(String),
}

/// Errors raised when an [`AddressField`] cannot be resolved to mailboxes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address is blank")]
    Blank,

    #[error("'{0}' is not an email address")]
    MissingAt(String),

    #[error("cannot parse address header '{value}': {reason}")]
    Unparseable { value: String, reason: String },
}

impl AddressField {
    /// Returns `true` if the field carries no addresses.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Plain(s) | Self::Header(s) => s.trim().is_empty(),
            Self::List(list) => list.is_empty(),
        }
    }

    /// Resolve the field into mailboxes, preserving header order.
    ///
    /// Group syntax (`team: a@x, b@x;`) is flattened into its members.
    pub fn mailboxes(&self) -> Result<Vec<Mailbox>, AddressError> {
        match self {
            Self::Empty => Ok(Vec::new()),
            Self::Plain(value) => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(AddressError::Blank);
                }
                if !value.contains('@') {
                    return Err(AddressError::MissingAt(value.to_owned()));
                }
                Ok(vec![Mailbox::new(value)])
            }
            Self::List(list) => {
                for mailbox in list {
                    if !mailbox.email.contains('@') {
                        return Err(AddressError::MissingAt(mailbox.email.clone()));
                    }
                }
                Ok(list.clone())
            }
            Self::Header(raw) => parse_header(raw),
        }
    }

    /// The first resolved mailbox, if any.
    pub fn first(&self) -> Result<Option<Mailbox>, AddressError> {
        Ok(self.mailboxes()?.into_iter().next())
    }
}

fn parse_header(raw: &str) -> Result<Vec<Mailbox>, AddressError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let list = mailparse::addrparse(raw).map_err(|e| AddressError::Unparseable {
        value: raw.to_owned(),
        reason: e.to_string(),
    })?;

    let mailboxes = flatten(&list);
    if let Some(bad) = mailboxes.iter().find(|m| !m.email.contains('@')) {
        return Err(AddressError::MissingAt(bad.email.clone()));
    }

    Ok(mailboxes)
}

/// Flatten a parsed address list into mailboxes, expanding groups in place.
pub(crate) fn flatten(list: &mailparse::MailAddrList) -> Vec<Mailbox> {
    let mut mailboxes = Vec::new();
    for addr in list.iter() {
        match addr {
            mailparse::MailAddr::Single(info) => mailboxes.push(from_single(info)),
            mailparse::MailAddr::Group(group) => {
                mailboxes.extend(group.addrs.iter().map(from_single));
            }
        }
    }
    mailboxes
}

fn from_single(info: &mailparse::SingleInfo) -> Mailbox {
    Mailbox {
        email: info.addr.clone(),
        name: info
            .display_name
            .as_ref()
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty()),
    }
}

impl From<&str> for AddressField {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}

impl From<String> for AddressField {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<Mailbox> for AddressField {
    fn from(mailbox: Mailbox) -> Self {
        Self::List(vec![mailbox])
    }
}

impl From<Vec<Mailbox>> for AddressField {
    fn from(list: Vec<Mailbox>) -> Self {
        if list.is_empty() {
            Self::Empty
        } else {
            Self::List(list)
        }
    }
}

impl<T: Into<AddressField>> From<Option<T>> for AddressField {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
