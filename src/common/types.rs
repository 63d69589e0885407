use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smartstring::{LazyCompact, SmartString};
use std::fmt::{Display, Formatter, Result as FmtResult};

pub const DEMO_API_KEY: &str = "demo_key";
pub const DEMO_API_SECRET: &str = "demo_secret";
pub const DEMO_API_URL: &str = "https://api.payplay.io";
pub const DEFAULT_CALLBACK_URL: &str = "https://example.com/webhook";

pub const STATUS_SUCCESS: &str = "SUCCESS";
pub const STATUS_PROCESSING: &str = "PROCESSING";
pub const STATUS_UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// API key, signing secret and base endpoint for one PayPlay account.
///
/// `Default` yields the public demo account, which is only useful against a
/// sandbox and must not be relied on in production.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
    base_url: String,
}

impl Credentials {
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();

        Self {
            key: key.into(),
            secret: secret.into(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Read `PAYPLAY_API_KEY`, `PAYPLAY_API_SECRET` and `PAYPLAY_API_URL`,
    /// falling back to the demo value for each variable that is unset.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, but resolves each variable through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        Self::new(
            var("PAYPLAY_API_KEY", DEMO_API_KEY),
            var("PAYPLAY_API_SECRET", DEMO_API_SECRET),
            var("PAYPLAY_API_URL", DEMO_API_URL),
        )
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEMO_API_KEY, DEMO_API_SECRET, DEMO_API_URL)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// A payout row as the exchange hands it over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutRequest {
    pub id: String,
    pub amount: Decimal,
    pub currency: SmartString<LazyCompact>,
    pub wallet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl PayoutRequest {
    pub fn new(
        id: impl Display,
        amount: Decimal,
        currency: &str,
        wallet: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            amount,
            currency: currency.into(),
            wallet: wallet.into(),
            callback_url: None,
        }
    }

    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());

        self
    }

    pub fn callback_url(&self) -> &str {
        self.callback_url.as_deref().unwrap_or(DEFAULT_CALLBACK_URL)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutResult {
    pub external_id: Option<String>,
    pub status: String,
    /// The provider payload as JSON text, kept for audit logs.
    pub raw: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn base_url_drops_trailing_slash() {
        let credentials = Credentials::new("k", "s", "https://mock//");

        assert_eq!(credentials.base_url(), "https://mock");
        assert_eq!(credentials.url("/v1/withdrawals"), "https://mock/v1/withdrawals");
    }

    #[test]
    fn default_credentials_are_demo() {
        let credentials = Credentials::default();

        assert_eq!(credentials.key(), DEMO_API_KEY);
        assert_eq!(credentials.secret(), DEMO_API_SECRET);
        assert_eq!(credentials.base_url(), DEMO_API_URL);
    }

    #[test]
    fn unset_variable_falls_back_alone() {
        let vars = HashMap::from([
            ("PAYPLAY_API_KEY", "live_key"),
            ("PAYPLAY_API_URL", "https://sandbox.payplay.io/"),
        ]);
        let credentials = Credentials::from_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(credentials.key(), "live_key");
        assert_eq!(credentials.secret(), DEMO_API_SECRET);
        assert_eq!(credentials.base_url(), "https://sandbox.payplay.io");
    }

    #[test]
    fn debug_hides_secret() {
        let rendered = format!("{:?}", Credentials::new("k", "hunter2", "https://mock"));

        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn callback_url_falls_back_to_default() {
        let request = PayoutRequest::new(1, Decimal::ONE, "USD", "X");

        assert_eq!(request.callback_url(), DEFAULT_CALLBACK_URL);
        assert_eq!(
            request.with_callback_url("https://me/cb").callback_url(),
            "https://me/cb"
        );
    }

    #[test]
    fn payout_request_loads_from_json_row() {
        let request: PayoutRequest = serde_json::from_str(
            r#"{"id":"42","amount":"100.50","currency":"USDT","wallet":"TXYZ"}"#,
        )
        .unwrap();

        assert_eq!(request.amount.to_string(), "100.50");
        assert_eq!(request.currency.as_str(), "USDT");
        assert!(request.callback_url.is_none());
    }
}
