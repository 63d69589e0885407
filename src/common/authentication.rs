use crate::common::{Error, types::Method};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use time::OffsetDateTime;

/// Compute the lowercase hex HMAC-SHA256 of `message` under `secret`.
pub fn sign(secret: &str, message: &str) -> Result<String, Error> {
    Signer::from(secret).sign(message)
}

/// Join the four signed fields with newlines. An absent body is the empty string.
pub fn canonical_string(timestamp: u64, method: Method, path: &str, body: &str) -> String {
    format!("{timestamp}\n{method}\n{path}\n{body}")
}

/// Milliseconds since the unix epoch.
pub fn timestamp_ms() -> Result<u64, Error> {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;

    u64::try_from(millis)
        .map_err(|error| Error::dependency("System time out of range", Box::new(error)))
}

#[derive(Clone)]
pub struct Signer {
    key: Vec<u8>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Signer { .. }")
    }
}

impl From<&str> for Signer {
    fn from(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }
}

impl Signer {
    pub fn sign(&self, message: &str) -> Result<String, Error> {
        // Create a SHA 256 HMAC with the key.
        let mut mac: Hmac<Sha256> = Hmac::new_from_slice(self.key.as_slice())?;

        mac.update(message.as_bytes());

        // Return the hex-encoded digest.
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    pub fn sign_envelope(&self, envelope: SignedEnvelope<'_>) -> Result<String, Error> {
        self.sign(&envelope.canonical_string())
    }
}

/// The fields covered by a request signature. Built per request and consumed
/// by signing.
#[derive(Debug, Clone, Copy)]
pub struct SignedEnvelope<'a> {
    pub timestamp: u64,
    pub method: Method,
    pub path: &'a str,
    pub body: &'a str,
}

impl<'a> SignedEnvelope<'a> {
    pub fn new(timestamp: u64, method: Method, path: &'a str, body: &'a str) -> Self {
        Self {
            timestamp,
            method,
            path,
            body,
        }
    }

    pub fn canonical_string(&self) -> String {
        canonical_string(self.timestamp, self.method, self.path, self.body)
    }
}
