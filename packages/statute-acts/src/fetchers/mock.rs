//! Mock fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::PageFetcher;

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(String),
    Status(u16),
    Transport(String),
}

/// Mock fetcher with canned responses per URL.
///
/// Unknown URLs answer with HTTP 404.
///
/// # Example
///
/// ```rust
/// use statute_acts::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_page("https://example.test/a", "<a href=\"/1\">Acts 1971</a>")
///     .with_status("https://example.test/b", 500);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, CannedResponse>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a 200 and `body`.
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, CannedResponse::Body(body.into()));
        self
    }

    /// Answer `url` with a non-success status.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.insert(url, CannedResponse::Status(status));
        self
    }

    /// Fail `url` before any response arrives.
    pub fn with_transport_error(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(url, CannedResponse::Transport(message.into()));
        self
    }

    /// URLs requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of fetches made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    fn insert(&self, url: impl Into<String>, response: CannedResponse) {
        self.responses.write().unwrap().insert(url.into(), response);
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        let response = self.responses.read().unwrap().get(url).cloned();
        match response {
            Some(CannedResponse::Body(body)) => Ok(body),
            Some(CannedResponse::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(CannedResponse::Transport(message)) => Err(FetchError::Transport {
                url: url.to_string(),
                source: message.into(),
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_responses() {
        let mock = MockFetcher::new()
            .with_page("https://a.test", "body")
            .with_status("https://b.test", 503)
            .with_transport_error("https://c.test", "connection reset");

        tokio_test::block_on(async {
            assert_eq!(mock.fetch("https://a.test").await.unwrap(), "body");
            assert_eq!(mock.fetch("https://b.test").await.unwrap_err().status(), Some(503));
            assert!(matches!(
                mock.fetch("https://c.test").await.unwrap_err(),
                FetchError::Transport { .. }
            ));
            assert_eq!(mock.fetch("https://unknown.test").await.unwrap_err().status(), Some(404));
        });
        assert_eq!(mock.call_count(), 4);
    }
}
