//! In-memory country index: exact code lookup, region enumeration and
//! border-link resolution.
//!
//! The index is built exactly once per run from the loader result and is
//! immutable afterwards. It preserves source order and applies no sorting of
//! its own; queries that need a different order do their own arranging.

use std::collections::BTreeSet;

use crate::state::Country;

/// Immutable, ordered collection of country records.
///
/// Constructed once at startup and passed by reference to the query engine
/// and the navigation adapter; there is deliberately no process-wide holder
/// for it.
#[derive(Debug, Default)]
pub struct CountryIndex {
    /// All records, in source order.
    countries: Vec<Country>,
}

/// One entry of a detail view's border-country strip.
///
/// A border code that resolves within the dataset yields the target's name
/// and flag; an unresolved code is kept, labelled with the code itself, so
/// the strip never drops entries.
#[derive(Clone, Debug)]
pub struct BorderLink {
    /// Border country code as listed in the source record.
    pub code: String,
    /// Display label: the resolved country's name, or the raw code.
    pub label: String,
    /// Flag reference of the resolved country; empty when unresolved.
    pub flag: String,
    /// Whether the code resolved to a record in this index.
    pub resolved: bool,
}

impl CountryIndex {
    /// Build the index from a loaded dataset, keeping source order.
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// All records in source order.
    #[must_use]
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the index holds no records (e.g., every source failed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// What: Exact lookup by any of the three code fields.
    ///
    /// Inputs:
    /// - `code`: Candidate alpha-3, alpha-2 or Olympic-style code.
    ///
    /// Output:
    /// - The first record whose alpha-3, alpha-2 or cioc code equals `code`
    ///   (case-sensitive), or `None`.
    ///
    /// Details:
    /// - An empty `code` never matches; records with absent code fields
    ///   store them as empty strings and must not be reachable that way.
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        if code.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| c.alpha3_code == code || c.alpha2_code == code || c.cioc == code)
    }

    /// What: Distinct non-empty region values, sorted.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - Sorted, deduplicated region names for populating filter choices.
    #[must_use]
    pub fn regions(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .countries
            .iter()
            .map(|c| c.region.as_str())
            .filter(|r| !r.is_empty())
            .collect();
        set.into_iter().map(ToOwned::to_owned).collect()
    }

    /// What: Resolve a record's border codes against this index.
    ///
    /// Inputs:
    /// - `country`: Record whose `borders` list to resolve.
    ///
    /// Output:
    /// - One [`BorderLink`] per border code, in source order; codes that do
    ///   not resolve keep their raw code as the label.
    #[must_use]
    pub fn border_links(&self, country: &Country) -> Vec<BorderLink> {
        country
            .borders
            .iter()
            .map(|code| match self.find_by_code(code) {
                Some(target) => BorderLink {
                    code: code.clone(),
                    label: target.name.clone(),
                    flag: target.flag_ref().to_string(),
                    resolved: true,
                },
                None => BorderLink {
                    code: code.clone(),
                    label: code.clone(),
                    flag: String::new(),
                    resolved: false,
                },
            })
            .collect()
    }
}
