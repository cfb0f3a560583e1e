//! Theme preference for Geodex.
//!
//! The preference is a single persistent `theme` key in the config directory
//! storing `dark` or `light`. It is read once at startup and written on
//! toggle; it is entirely independent of the country data. Path resolution
//! for the config/cache/log directories also lives here.

/// Path resolution for config directories.
mod paths;

pub use paths::{cache_dir, config_dir, logs_dir};

use std::path::Path;

/// Name of the persistent preference key (and file) in the config directory.
const THEME_KEY: &str = "theme";

/// User theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePref {
    /// Light theme (the default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemePref {
    /// Stored string form of the preference (`"light"` / `"dark"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// What: Parse a stored preference value.
    ///
    /// Inputs:
    /// - `value`: Raw file contents.
    ///
    /// Output:
    /// - `Dark` for `"dark"` (any surrounding whitespace ignored); `Light`
    ///   for anything else, so an unrecognized value degrades to the default.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim() == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The opposite preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// What: Read the persisted preference from `<dir>/theme`.
    ///
    /// Inputs:
    /// - `dir`: Config directory.
    ///
    /// Output:
    /// - The stored preference; `Light` when the key is missing or
    ///   unreadable.
    #[must_use]
    pub fn load_from(dir: &Path) -> Self {
        std::fs::read_to_string(dir.join(THEME_KEY))
            .map(|body| Self::parse(&body))
            .unwrap_or_default()
    }

    /// What: Persist the preference to `<dir>/theme`.
    ///
    /// Inputs:
    /// - `dir`: Config directory.
    ///
    /// Output:
    /// - Writes `dark` or `light`; failures are logged and swallowed so a
    ///   read-only config directory never breaks the run.
    pub fn save_to(self, dir: &Path) {
        if let Err(e) = std::fs::write(dir.join(THEME_KEY), self.as_str()) {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
    }
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Uses `OnceLock` to ensure the mutex is constructed exactly once per process.
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
