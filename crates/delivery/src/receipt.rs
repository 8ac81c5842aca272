use serde::{Deserialize, Serialize};

/// Outcome of a delivery the caller should treat as done.
///
/// `warning` is set when the remote service reported a failure that the
/// delivery method was configured to tolerate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// HTTP (or equivalent) status code returned by the remote service.
    pub status_code: u16,

    /// Raw response body.
    pub body: String,

    /// Provider-assigned message identifier, when one was returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Non-fatal failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl DeliveryReceipt {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
            message_id: None,
            warning: None,
        }
    }

    #[must_use]
    pub fn with_message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    #[must_use]
    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

/// Settings a delivery method exposes to its host.
///
/// Hosts expect every delivery method to answer with a settings object even
/// when it has nothing configurable; it serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(serde_json::Map<String, serde_json::Value>);

impl Settings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_omits_absent_fields() {
        let receipt = DeliveryReceipt::new(202, "");
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json, serde_json::json!({"status_code": 202, "body": ""}));
    }

    #[test]
    fn receipt_with_message_id_and_warning() {
        let receipt = DeliveryReceipt::new(400, "{}")
            .with_message_id(Some("abc".into()))
            .with_warning(Some("bad".into()));
        assert_eq!(receipt.message_id.as_deref(), Some("abc"));
        assert_eq!(receipt.warning.as_deref(), Some("bad"));
    }

    #[test]
    fn default_settings_serialize_to_empty_object() {
        let settings = Settings::default();
        assert!(settings.is_empty());
        assert_eq!(serde_json::to_string(&settings).unwrap(), "{}");
    }
}
