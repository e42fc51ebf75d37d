//! The outbound seam: where CSV text comes from.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use exn::ResultExt;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Shared handle to a source implementation.
pub type SourceHandle = Arc<dyn CsvSource>;

/// A named origin of one CSV document.
///
/// The fetcher only ever asks a source for the full document text; HTTP
/// details (and test doubles) live behind this trait.
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Name of the configured source (used for logging and for naming the
    /// failing side of a two-source fetch in errors).
    fn name(&self) -> &str;

    /// Retrieves the whole CSV document as text.
    async fn fetch(&self) -> Result<String>;
}

/// A CSV document fetched over HTTP GET from a fixed URL.
///
/// Carries its own bounded request timeout; expiry surfaces as a network
/// failure like any other unreachable source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    name: String,
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Creates a source for `url` with the given per-request timeout.
    pub fn new(name: impl Into<String>, url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build().or_raise(|| ErrorKind::Client)?;
        Ok(Self {
            name: name.into(),
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl CsvSource for HttpSource {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(skip(self), fields(source = self.name, url = self.url))]
    async fn fetch(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await.or_raise(|| ErrorKind::Network {
            source: self.name.clone(),
        })?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Status {
                source: self.name.clone(),
                status: status.to_string(),
            });
        }
        response.text().await.or_raise(|| ErrorKind::Body {
            source: self.name.clone(),
        })
    }
}

/// Canned source for tests: a fixed body or a fixed failure, plus a call
/// counter so cache behavior can be asserted.
///
/// Not behind `#[cfg(test)]` so that other crates can use it from their own
/// tests via the `mock` feature.
#[cfg(feature = "mock")]
#[derive(Debug)]
pub struct MockSource {
    name: String,
    response: std::result::Result<String, ErrorKind>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(feature = "mock")]
impl MockSource {
    /// A source that always succeeds with `body`.
    pub fn ok(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: Ok(body.into()),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// A source that always fails with the given error kind.
    pub fn failing(name: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            name: name.into(),
            response: Err(kind),
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of times `fetch` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(feature = "mock")]
#[async_trait]
impl CsvSource for MockSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<String> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(kind) => exn::bail!(kind.clone()),
        }
    }
}
