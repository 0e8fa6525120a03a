//! GST lookup client
//!
//! One endpoint: `GET <base>/gst-details/{gstin}`. The identifier is
//! percent-encoded as a single path segment before the URL is built, so
//! arbitrary user input cannot change the request path. No retries and no
//! client-side timeout; a request runs to completion or failure.

use gstview_core::prelude::*;
use gstview_core::GstDetails;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use url::Url;

/// Production lookup service.
pub const DEFAULT_BASE_URL: &str = "https://pabli-backend.onrender.com";

/// Characters that must be escaped inside a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Client for the GST lookup service
#[derive(Debug, Clone)]
pub struct GstApiClient {
    http: Client,
    base_url: String,
}

impl GstApiClient {
    /// Create a client against `base_url`.
    ///
    /// The base URL is validated once here so a bad configuration fails at
    /// startup rather than on the first submit.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| Error::config(format!("invalid base URL {base_url:?}: {e}")))?;

        let http = Client::builder()
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Client against the production service.
    pub fn production() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the registration record for `gstin`.
    ///
    /// Empty identifiers are sent as-is; the service decides what to do
    /// with them. All failure modes (transport, non-2xx, undecodable body)
    /// collapse into one user-visible condition upstream, so the error
    /// variants here exist for the log file.
    pub async fn fetch_details(&self, gstin: &str) -> Result<GstDetails> {
        let url = lookup_url(&self.base_url, gstin);
        debug!(%url, "requesting GST details");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::unexpected_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| Error::malformed_payload(e.to_string()))
    }
}

/// Build the lookup URL with `gstin` escaped as one path segment.
pub fn lookup_url(base_url: &str, gstin: &str) -> String {
    format!(
        "{}/gst-details/{}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(gstin, PATH_SEGMENT)
    )
}
