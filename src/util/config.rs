//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing, plus the typed
//! [`Settings`] loaded from `settings.conf`.

use std::path::{Path, PathBuf};

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Trims whitespace from both key and value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if !trimmed.contains('=') {
        return None;
    }
    let mut parts = trimmed.splitn(2, '=');
    let key = parts.next()?.trim().to_string();
    let value = parts.next()?.trim().to_string();
    Some((key, value))
}

/// Optional overrides read from `settings.conf` in the config directory.
///
/// Only data-source plumbing is configurable; the cache TTL and the search
/// debounce window are fixed contracts and deliberately have no keys here.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// Override for the primary remote source URL.
    pub api_url: Option<String>,
    /// Override for the local fallback dataset path.
    pub fallback_path: Option<PathBuf>,
}

impl Settings {
    /// What: Load settings from `<dir>/settings.conf`.
    ///
    /// Inputs:
    /// - `dir`: Configuration directory to look in.
    ///
    /// Output:
    /// - Parsed [`Settings`]; defaults when the file is missing or a key is
    ///   absent or empty.
    ///
    /// Details:
    /// - Unknown keys are ignored so the file can be shared with future
    ///   versions; parse failures never abort startup.
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        let mut out = Self::default();
        let Ok(body) = std::fs::read_to_string(dir.join("settings.conf")) else {
            return out;
        };
        for line in body.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, value)) = parse_key_value(line) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "api_url" => out.api_url = Some(value),
                "fallback_path" => out.fallback_path = Some(PathBuf::from(value)),
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_skip_comment_or_empty() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# comment"));
        assert!(skip_comment_or_empty("// comment"));
        assert!(skip_comment_or_empty("; comment"));
        assert!(!skip_comment_or_empty("key = value"));
    }

    #[test]
    fn config_parse_key_value() {
        assert_eq!(
            parse_key_value("  api_url = https://example.test  "),
            Some(("api_url".to_string(), "https://example.test".to_string()))
        );
        assert_eq!(parse_key_value("no delimiter"), None);
    }

    #[test]
    /// What: Parse a settings file with comments, blanks and unknown keys.
    ///
    /// Inputs:
    /// - Temp config dir containing a `settings.conf`.
    ///
    /// Output:
    /// - Known keys populate the struct; everything else is ignored.
    fn settings_load_from_file_and_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Missing file -> defaults
        let s = Settings::load_from(dir.path());
        assert!(s.api_url.is_none());
        assert!(s.fallback_path.is_none());

        std::fs::write(
            dir.path().join("settings.conf"),
            "# geodex settings\n\napi_url = https://example.test/v2/all\nfallback_path = /srv/geo/countries.json\nunknown = ignored\nempty =\n",
        )
        .expect("write settings");
        let s = Settings::load_from(dir.path());
        assert_eq!(s.api_url.as_deref(), Some("https://example.test/v2/all"));
        assert_eq!(
            s.fallback_path.as_deref(),
            Some(Path::new("/srv/geo/countries.json"))
        );
    }
}
