//! Page fetcher implementations.
//!
//! - `HttpFetcher` - one reqwest GET per page, no retry
//! - `MockFetcher` - canned bodies and statuses for tests

mod http;
mod mock;

pub use http::{HttpFetcher, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::PageFetcher;
