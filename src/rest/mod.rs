use crate::common::{
    Error,
    authentication::{SignedEnvelope, Signer, timestamp_ms},
    envelope,
    types::{Credentials, Method},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub mod transport;
pub mod withdrawals;

pub use transport::{HttpTransport, Request, Transport};

pub const HEADER_KEY: &str = "X-PAYPLAY-KEY";
pub const HEADER_TIMESTAMP: &str = "X-PAYPLAY-TIMESTAMP";
pub const HEADER_SIGN: &str = "X-PAYPLAY-SIGN";

#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    credentials: Arc<Credentials>,
    signer: Signer,
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign and send one request, then unwrap the PayPlay envelope.
    ///
    /// Transport failures come back untouched. Anything else that is not a
    /// successful JSON envelope becomes `Error::InvalidJson` or
    /// `Error::RemotePayload` with the response text attached.
    pub async fn signed_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, Error>
    where
        B: Serialize + ?Sized,
    {
        let timestamp = timestamp_ms()?;
        let body = match body {
            Some(body) => serde_json::to_string(body)?,
            None => String::new(),
        };
        let signature = self
            .signer
            .sign_envelope(SignedEnvelope::new(timestamp, method, path, &body))?;

        let request = Request {
            method,
            url: self.credentials.url(path),
            body,
            headers: vec![
                ("Content-Type", String::from("application/json")),
                (HEADER_KEY, self.credentials.key().to_owned()),
                (HEADER_TIMESTAMP, timestamp.to_string()),
                (HEADER_SIGN, signature),
            ],
        };

        debug!("Sending signed {method} {path} @ {timestamp}");

        let raw = self.transport.send(request).await?;

        envelope::open(&raw)
    }
}

pub struct ClientBuilder<T = HttpTransport> {
    credentials: Option<Credentials>,
    transport: T,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            credentials: None,
            transport: HttpTransport::default(),
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ClientBuilder<T> {
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);

        self
    }

    pub fn with_transport<U: Transport>(self, transport: U) -> ClientBuilder<U> {
        ClientBuilder {
            credentials: self.credentials,
            transport,
        }
    }

    /// Build the client, falling back to the demo credentials when none
    /// were supplied.
    pub fn build(self) -> Client<T> {
        let credentials = self.credentials.unwrap_or_else(|| {
            debug!("No PayPlay credentials supplied, using demo account");

            Credentials::default()
        });

        Client {
            signer: Signer::from(credentials.secret()),
            credentials: Arc::new(credentials),
            transport: self.transport,
        }
    }
}
