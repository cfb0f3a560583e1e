//! Dataset acquisition: cache, then the remote source, then the local
//! fallback, then an empty dataset.
//!
//! [`load`] never fails; every error is absorbed and logged and the caller
//! always receives a (possibly empty) dataset.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::state::Country;
use crate::util::config::Settings;

/// Primary remote source: a fields-filtered bulk country listing.
const API_URL: &str = "https://restcountries.com/v2/all?fields=name,alpha2Code,alpha3Code,cioc,flag,flags,population,region,capital,nativeName,subregion,topLevelDomain,currencies,languages,borders";

/// Bundled fallback snapshot, same record shape as the remote source.
const BUNDLED_DATA: &str = include_str!("../../data/countries.json");

/// Loading-state signal consumed by the presentation layer.
///
/// The loader calls `show_loading(true)` only when it actually goes out to a
/// source (a cache hit stays silent) and always pairs it with a final
/// `show_loading(false)`.
pub trait LoadProgress {
    /// Toggle the user-visible loading indicator.
    fn show_loading(&self, _active: bool) {}
}

/// No-op progress sink for headless callers and tests.
pub struct NoProgress;

impl LoadProgress for NoProgress {}

/// Where the loader looks for country data.
#[derive(Clone, Debug)]
pub struct DataSources {
    /// Primary remote source URL.
    pub api_url: String,
    /// Optional local fallback dataset; when `None` the bundled snapshot is
    /// used.
    pub fallback_path: Option<PathBuf>,
    /// Skip the cache read (the result is still cached afterwards).
    pub refresh: bool,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            fallback_path: None,
            refresh: false,
        }
    }
}

impl DataSources {
    /// Apply `settings.conf` overrides on top of the defaults.
    #[must_use]
    pub fn from_settings(settings: &Settings, refresh: bool) -> Self {
        Self {
            api_url: settings.api_url.clone().unwrap_or_else(|| API_URL.to_string()),
            fallback_path: settings.fallback_path.clone(),
            refresh,
        }
    }
}

/// What: Acquire the country dataset.
///
/// Inputs:
/// - `sources`: Source configuration (URLs, fallback, refresh flag).
/// - `cache_dir`: Directory holding the disk cache entry.
/// - `progress`: Loading-state sink for the presentation layer.
///
/// Output:
/// - The dataset, possibly empty. Never an error.
///
/// Details:
/// - Priority order, short-circuiting on first success: valid cache entry
///   (no network, no loading signal) -> remote source -> local fallback ->
///   empty. Successful remote/fallback loads are persisted to the cache.
/// - No retries beyond the single fallback step and no merging between
///   sources.
pub async fn load(
    sources: &DataSources,
    cache_dir: &Path,
    progress: &dyn LoadProgress,
) -> Vec<Country> {
    if !sources.refresh
        && let Some(data) = super::read_cache(cache_dir)
    {
        return data;
    }

    progress.show_loading(true);
    let data = match fetch_remote(&sources.api_url).await {
        Ok(data) => {
            info!(countries = data.len(), "loaded dataset from remote source");
            super::write_cache(cache_dir, &data);
            data
        }
        Err(primary) => {
            warn!(error = %primary, "primary source failed; trying local fallback");
            match load_fallback(sources.fallback_path.as_deref()) {
                Ok(data) => {
                    info!(countries = data.len(), "loaded dataset from local fallback");
                    super::write_cache(cache_dir, &data);
                    data
                }
                Err(fallback) => {
                    error!(
                        primary = %primary,
                        fallback = %fallback,
                        "failed to load country data"
                    );
                    Vec::new()
                }
            }
        }
    };
    progress.show_loading(false);
    data
}

/// What: Fetch and decode the remote bulk listing.
///
/// Inputs:
/// - `url`: Primary source URL.
///
/// Output:
/// - The decoded dataset, or an error for a non-success status, transport
///   failure or undecodable body.
async fn fetch_remote(url: &str) -> super::Result<Vec<Country>> {
    let resp = super::client().get(url).send().await?;
    if !resp.status().is_success() {
        return Err(format!("country API returned {}", resp.status()).into());
    }
    Ok(resp.json::<Vec<Country>>().await?)
}

/// What: Read the local fallback dataset.
///
/// Inputs:
/// - `path`: Configured override file; `None` selects the bundled snapshot.
///
/// Output:
/// - The decoded dataset, or the IO/decode error.
///
/// Details:
/// - A configured override that cannot be read counts as a fallback failure;
///   it does not silently fall through to the bundled snapshot, so a broken
///   deployment is visible in the logs instead of masked.
fn load_fallback(path: Option<&Path>) -> super::Result<Vec<Country>> {
    if let Some(p) = path {
        debug!(path = %p.display(), "reading fallback dataset override");
        let body = std::fs::read_to_string(p)?;
        return Ok(serde_json::from_str(&body)?);
    }
    Ok(serde_json::from_str(BUNDLED_DATA)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The bundled snapshot parses and resolves its own borders.
    ///
    /// Inputs:
    /// - The compiled-in `data/countries.json`.
    ///
    /// Output:
    /// - Non-empty dataset; every record has a name and an alpha-3 code.
    fn bundled_snapshot_parses() {
        let data = load_fallback(None).expect("bundled snapshot must parse");
        assert!(!data.is_empty());
        assert!(data.iter().all(|c| !c.name.is_empty()));
        assert!(data.iter().all(|c| !c.alpha3_code.is_empty()));
    }

    #[test]
    /// What: A configured but unreadable override is a fallback failure.
    ///
    /// Inputs:
    /// - A path that does not exist.
    ///
    /// Output:
    /// - `Err`, not a silent switch to the bundled snapshot.
    fn fallback_override_failure_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.json");
        assert!(load_fallback(Some(&missing)).is_err());
    }
}
