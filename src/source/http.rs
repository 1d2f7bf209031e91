//! HTTP snapshot source.
//!
//! Fetches `status.json` from a web server, appending a `t=<epoch-millis>`
//! cache-buster so intermediate caches never serve a stale snapshot.
//!
//! ## Example
//!
//! ```rust,no_run
//! use statusboard::{HttpSource, SnapshotSource};
//! use std::time::Duration;
//!
//! # tokio_test::block_on(async {
//! let source = HttpSource::builder()
//!     .url("http://localhost:5959/status.json")
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! let snapshot = source.fetch().await.unwrap();
//! println!("{} providers", snapshot.data.len());
//! # });
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use tracing::debug;

use super::{FetchError, SnapshotSource, StatusSnapshot};

const DEFAULT_URL: &str = "http://localhost:5959/status.json";
const USER_AGENT: &str = concat!("statusboard/", env!("CARGO_PKG_VERSION"));

/// A snapshot source that fetches the snapshot over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
    description: String,
}

impl HttpSource {
    /// Create a new builder for configuring the source.
    pub fn builder() -> HttpSourceBuilder {
        HttpSourceBuilder::default()
    }

    /// Returns the snapshot URL without the cache-buster.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The URL actually requested at `now_ms`, with `t=<now_ms>` appended to
    /// any existing query.
    pub fn cache_busted_url(&self, now_ms: i64) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("t", &now_ms.to_string());
        url
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<StatusSnapshot, FetchError> {
        let url = self.cache_busted_url(Utc::now().timestamp_millis());
        debug!(%url, "requesting snapshot");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let snapshot = serde_json::from_slice(&body)?;
        Ok(snapshot)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Builder for HttpSource.
#[derive(Debug, Default)]
pub struct HttpSourceBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HttpSourceBuilder {
    /// Set the snapshot URL (default: "http://localhost:5959/status.json").
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the overall request timeout (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout (default: 10 seconds).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the source.
    pub fn build(self) -> Result<HttpSource, FetchError> {
        let raw = self.url.unwrap_or_else(|| DEFAULT_URL.to_string());
        let url =
            Url::parse(&raw).map_err(|e| FetchError::Http(format!("invalid URL {raw}: {e}")))?;

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
            .connect_timeout(self.connect_timeout.unwrap_or(Duration::from_secs(10)))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(HttpSource {
            client,
            description: format!("http: {}", url),
            url,
        })
    }
}
