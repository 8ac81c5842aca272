use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which response statuses count as a failed delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Only 4xx responses are failures; 5xx responses are returned as-is.
    #[default]
    ClientErrors,

    /// Both 4xx and 5xx responses are failures.
    AllErrors,
}

impl FailurePolicy {
    /// Returns `true` if `status` is a failed delivery under this policy.
    pub fn is_failure(self, status: u16) -> bool {
        match self {
            Self::ClientErrors => (400..500).contains(&status),
            Self::AllErrors => (400..600).contains(&status),
        }
    }
}

/// Configuration for the SendGrid delivery method.
#[derive(Clone, Serialize, Deserialize)]
pub struct SendGridConfig {
    /// SendGrid API key, sent as a bearer token.
    pub api_key: String,

    /// Return [`SendGridError::DeliveryFailed`](crate::SendGridError::DeliveryFailed)
    /// for failed deliveries instead of logging a warning. Defaults to `false`.
    #[serde(default)]
    pub raise_delivery_errors: bool,

    /// Which statuses count as failures. Defaults to 4xx only.
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Base URL for the SendGrid API. Override this for testing against a
    /// mock server.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "https://api.sendgrid.com".to_owned()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("api_key", &"[REDACTED]")
            .field("raise_delivery_errors", &self.raise_delivery_errors)
            .field("failure_policy", &self.failure_policy)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl SendGridConfig {
    /// Create a new configuration with the given API key.
    ///
    /// Failed deliveries are logged rather than raised, and only 4xx
    /// responses count as failures.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            raise_delivery_errors: false,
            failure_policy: FailurePolicy::default(),
            api_base_url: default_api_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }

    #[must_use]
    pub fn with_raise_delivery_errors(mut self, raise: bool) -> Self {
        self.raise_delivery_errors = raise;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Override the API base URL (useful for testing).
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// URL of the Mail Send endpoint.
    pub fn mail_send_url(&self) -> String {
        format!("{}/v3/mail/send", self.api_base_url.trim_end_matches('/'))
    }
}
