use crate::common::{Error, types::Method};
use reqwest::Client as HttpClient;
use tracing::{debug, trace};

/// One outgoing call, fully signed and ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    /// The exact bytes covered by the signature, empty when there is no body.
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Moves a signed request to PayPlay and hands back the raw response body.
///
/// Implementations must report network failures as `Err`; a reply with an
/// error status code is still a reply and is returned as text.
pub trait Transport {
    fn send(&self, request: Request) -> impl Future<Output = Result<String, Error>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl From<HttpClient> for HttpTransport {
    fn from(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<String, Error> {
        let Request {
            method,
            url,
            body,
            headers,
        } = request;

        let mut builder = match method {
            Method::Get => self.http_client.get(url.as_str()),
            Method::Post => self.http_client.post(url.as_str()),
        };

        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        if !body.is_empty() {
            builder = builder.body(body);
        }

        // Send the request and await the response text.
        let response = builder.send().await?;

        debug!("{method} {url} => {}", response.status());

        let text = response.text().await?;

        trace!("{method} {url} body => {text}");

        Ok(text)
    }
}
