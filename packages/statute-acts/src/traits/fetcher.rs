//! Page fetching.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Fetches the raw body of a page.
///
/// One call is one request; implementations do not retry. A non-success
/// status must come back as [`crate::FetchError::Status`] so the caller
/// can report the code and move on.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body as text.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        (**self).fetch(url).await
    }
}
