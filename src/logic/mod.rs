//! Core non-UI logic split into modular submodules.

pub mod debounce;
pub mod filter;

// Re-export public APIs to preserve existing import paths (crate::logic::...)
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use filter::{FilterOutcome, NameHighlight, REGION_ALL, filter};
