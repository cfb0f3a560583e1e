//! Disk cache for the country dataset.
//!
//! A single JSON file holds `{ts: epoch-millis, data: [Country]}`. An entry
//! is valid only while `now - ts` stays under the fixed 24 h TTL; a missing,
//! corrupt or expired file reads exactly like no cache at all. No failure in
//! here may ever reach a caller.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::state::Country;

/// Cache key; also the file stem of the on-disk entry.
pub const CACHE_KEY: &str = "countries_cache_v1";

/// Cache TTL in milliseconds (24 hours), fixed.
pub const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Disk cache entry with Unix-millisecond timestamp (for serialization).
#[derive(serde::Serialize, serde::Deserialize, Debug)]
struct CacheEntry {
    /// Epoch milliseconds at which the dataset was acquired.
    ts: i64,
    /// The cached dataset.
    data: Vec<Country>,
}

/// What: Path of the cache entry inside `dir`.
///
/// Inputs:
/// - `dir`: Cache directory.
///
/// Output:
/// - `<dir>/countries_cache_v1.json`.
#[must_use]
pub fn cache_path(dir: &Path) -> PathBuf {
    dir.join(format!("{CACHE_KEY}.json"))
}

/// What: Read the cached dataset if present, parseable and fresh.
///
/// Inputs:
/// - `dir`: Cache directory.
///
/// Output:
/// - `Some(dataset)` for a structurally valid entry younger than the TTL;
///   `None` otherwise.
///
/// Details:
/// - IO errors, corrupt JSON and stale timestamps all degrade to a miss;
///   they are debug-logged and never surfaced.
#[must_use]
pub fn read_cache(dir: &Path) -> Option<Vec<Country>> {
    let path = cache_path(dir);
    let body = std::fs::read_to_string(&path).ok()?;
    let entry: CacheEntry = match serde_json::from_str(&body) {
        Ok(entry) => entry,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring corrupt cache entry");
            return None;
        }
    };
    let age_ms = chrono::Utc::now().timestamp_millis() - entry.ts;
    if age_ms < CACHE_TTL_MS {
        debug!(
            countries = entry.data.len(),
            age_minutes = age_ms / 60_000,
            "cache hit"
        );
        Some(entry.data)
    } else {
        debug!(age_minutes = age_ms / 60_000, "cache entry expired");
        None
    }
}

/// What: Persist a dataset with the current timestamp.
///
/// Inputs:
/// - `dir`: Cache directory.
/// - `data`: Dataset to store.
///
/// Output:
/// - Writes the entry; failures (quota, permissions) are warn-logged and
///   swallowed so the absence of a cache never blocks anything.
pub fn write_cache(dir: &Path, data: &[Country]) {
    let entry = CacheEntry {
        ts: chrono::Utc::now().timestamp_millis(),
        data: data.to_vec(),
    };
    let path = cache_path(dir);
    match serde_json::to_string(&entry) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                warn!(path = %path.display(), error = %e, "failed to write dataset cache");
            } else {
                debug!(countries = data.len(), "saved dataset cache");
            }
        }
        Err(e) => warn!(error = %e, "failed to serialize dataset cache"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str) -> Country {
        Country {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Write a raw entry with an explicit timestamp, bypassing `write_cache`.
    fn write_raw(dir: &Path, ts: i64, names: &[&str]) {
        let data: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({"name": n}))
            .collect();
        let body = serde_json::json!({"ts": ts, "data": data});
        std::fs::write(
            cache_path(dir),
            serde_json::to_string(&body).expect("serialize"),
        )
        .expect("write raw cache");
    }

    #[test]
    /// What: Round-trip a dataset through the cache.
    ///
    /// Inputs:
    /// - Fresh temp dir; two-country dataset.
    ///
    /// Output:
    /// - Read returns the same names immediately after write.
    fn cache_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(read_cache(dir.path()).is_none());
        write_cache(dir.path(), &[country("Peru"), country("Bolivia")]);
        let back = read_cache(dir.path()).expect("fresh entry");
        let names: Vec<&str> = back.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Peru", "Bolivia"]);
    }

    #[test]
    /// What: Enforce the 24 h TTL boundary.
    ///
    /// Inputs:
    /// - Entries stamped just inside and just past the TTL.
    ///
    /// Output:
    /// - The near-expiry entry reads back; the expired one reads as absent.
    fn cache_ttl_boundary() {
        let now = chrono::Utc::now().timestamp_millis();
        let dir = tempfile::tempdir().expect("tempdir");

        // Written 23h59m ago -> still valid
        write_raw(dir.path(), now - (CACHE_TTL_MS - 60_000), &["Peru"]);
        assert!(read_cache(dir.path()).is_some());

        // Written 24h00m01s ago -> treated as absent
        write_raw(dir.path(), now - (CACHE_TTL_MS + 1_000), &["Peru"]);
        assert!(read_cache(dir.path()).is_none());
    }

    #[test]
    /// What: Absorb corrupt cache contents as a miss.
    ///
    /// Inputs:
    /// - Non-JSON bytes, and JSON of the wrong shape.
    ///
    /// Output:
    /// - `read_cache` returns `None` without panicking.
    fn cache_corrupt_reads_as_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(cache_path(dir.path()), "not json {").expect("write");
        assert!(read_cache(dir.path()).is_none());
        std::fs::write(cache_path(dir.path()), r#"{"ts": "soon", "data": 3}"#).expect("write");
        assert!(read_cache(dir.path()).is_none());
    }
}
