//! Application state models.
//!
//! Value types live in [`types`]; [`AppContext`] bundles the per-run state
//! that the rest of the crate receives by reference.

pub mod types;

// Public re-exports to keep existing paths working
pub use types::{Country, Currency, Flags, Language};

/// Per-run application context, constructed once at startup.
///
/// Replaces ambient globals: the country index is written exactly once (from
/// the data loader) and only ever read afterwards; the theme preference and
/// navigator are the only mutable pieces, and they are owned here rather than
/// living in statics.
pub struct AppContext {
    /// The immutable country index built from the loader result.
    pub index: crate::index::CountryIndex,
    /// Current theme preference (persisted independently of country data).
    pub theme: crate::theme::ThemePref,
    /// Navigation history for list/detail views.
    pub nav: crate::nav::Navigator,
}

impl AppContext {
    /// Build a context from a loaded dataset, a theme preference and a fresh
    /// navigation history.
    #[must_use]
    pub fn new(countries: Vec<Country>, theme: crate::theme::ThemePref) -> Self {
        Self {
            index: crate::index::CountryIndex::new(countries),
            theme,
            nav: crate::nav::Navigator::new(),
        }
    }
}
