//! Single-request page fetching.
//!
//! A fetch is exactly one GET with a hard timeout and no retries. Every
//! transport problem comes back as a [`FetchError`]; nothing here panics or
//! propagates past the caller's task.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use bookmarklens_shared::{BodyEncoding, BookmarkLensError, Result};

/// User-Agent string for page requests.
const USER_AGENT: &str = concat!("bookmarklens/", env!("CARGO_PKG_VERSION"));

/// Redirect hops followed before giving up.
const MAX_REDIRECTS: usize = 10;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Coarse failure classification used for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    Network,
    Timeout,
    Status,
    Decode,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network-error",
            Self::Timeout => "timeout",
            Self::Status => "non-OK status",
            Self::Decode => "decode-error",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why one fetch did not produce a page body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("redirect error: {0}")]
    Redirect(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to read body: {0}")]
    Decode(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Timeout(_) => FailureReason::Timeout,
            Self::Connect(_) | Self::Redirect(_) | Self::Transport(_) => FailureReason::Network,
            Self::Status(_) => FailureReason::Status,
            Self::Decode(_) => FailureReason::Decode,
        }
    }

    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_redirect() {
            Self::Redirect(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// PageFetcher
// ---------------------------------------------------------------------------

/// Fetches the raw markup behind a URL.
///
/// Implementations perform at most one outbound request per call and must
/// honour `timeout`.
pub trait PageFetcher: Send + Sync {
    fn fetch(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> impl Future<Output = std::result::Result<String, FetchError>> + Send;
}

/// `reqwest`-backed fetcher sharing one connection pool across all requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    encoding: BodyEncoding,
}

impl HttpFetcher {
    /// Build a fetcher with its own HTTP client.
    pub fn new(encoding: BodyEncoding) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| BookmarkLensError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, encoding))
    }

    /// Use an existing client (custom TLS, proxies, ...).
    pub fn with_client(client: Client, encoding: BodyEncoding) -> Self {
        Self { client, encoding }
    }

    pub fn encoding(&self) -> BodyEncoding {
        self.encoding
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> std::result::Result<String, FetchError> {
        debug!(%url, ?timeout, "fetching page");

        let response = self
            .client
            .get(url.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        match self.encoding {
            BodyEncoding::Utf8 => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| FetchError::from_reqwest(e, timeout))?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            BodyEncoding::Declared => response
                .text()
                .await
                .map_err(|e| FetchError::from_reqwest(e, timeout)),
        }
    }
}
