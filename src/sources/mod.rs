//! Country data retrieval: cache store, remote fetch and local fallback.

use std::sync::LazyLock;
use std::time::Duration;

/// Caching of the fetched dataset on disk.
mod cache;
/// Dataset acquisition with fallback ordering.
mod fetch;

pub use cache::{CACHE_KEY, CACHE_TTL_MS, cache_path, read_cache, write_cache};
pub use fetch::{DataSources, LoadProgress, NoProgress, load};

/// Result alias for fetch internals; errors never escape [`load`].
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with connection pooling for dataset fetching.
///
/// Timeout policy: 15 s to connect, 30 s for the whole request. The remote
/// source has no independent per-phase timeout, so these bounds are what
/// guarantees the local fallback is reached when the primary source hangs.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("Geodex/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Access the shared HTTP client.
fn client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}
