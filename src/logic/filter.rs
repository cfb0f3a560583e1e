//! The query engine: region filter plus text search with name highlighting.
//!
//! Filtering starts from the full index in source order, applies the exact
//! region filter, then the case-folded substring search over name, capital
//! and native name. Highlight annotations are returned in a map parallel to
//! the result list, keyed by the record's alpha-3 code; the canonical
//! records are never decorated, so successive queries cannot leak stale
//! highlights into each other.

use std::collections::HashMap;

use crate::index::CountryIndex;
use crate::state::Country;
use crate::util::{contains_fold, escape_html, find_fold};

/// Region filter sentinel meaning "no region filtering".
pub const REGION_ALL: &str = "all";

/// Ephemeral, query-derived decoration of a matched display name.
///
/// The three parts are HTML-escaped independently at construction so the
/// rendered markup can never smuggle tags out of a country name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameHighlight {
    /// Escaped text before the match.
    pub prefix: String,
    /// Escaped matched substring.
    pub matched: String,
    /// Escaped text after the match.
    pub suffix: String,
}

impl NameHighlight {
    /// Build a highlight from a byte range of the original name.
    fn from_range(name: &str, start: usize, end: usize) -> Self {
        Self {
            prefix: escape_html(&name[..start]),
            matched: escape_html(&name[start..end]),
            suffix: escape_html(&name[end..]),
        }
    }

    /// Rendering-ready markup: `prefix<mark>matched</mark>suffix`.
    #[must_use]
    pub fn markup(&self) -> String {
        format!("{}<mark>{}</mark>{}", self.prefix, self.matched, self.suffix)
    }
}

/// Result of one filter pass: the surviving records in source order plus the
/// highlight annotations for records that matched on their name.
#[derive(Debug, Default)]
pub struct FilterOutcome<'a> {
    /// Surviving records, original order preserved (no sort is applied).
    pub items: Vec<&'a Country>,
    /// Name highlights keyed by the record's alpha-3 code.
    pub highlights: HashMap<String, NameHighlight>,
}

impl FilterOutcome<'_> {
    /// Number of surviving records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no record survived the filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Highlight annotation for a record, when its name matched the query.
    #[must_use]
    pub fn highlight_for(&self, country: &Country) -> Option<&NameHighlight> {
        self.highlights.get(&country.alpha3_code)
    }

    /// Display name for list rendering: highlight markup when present, the
    /// plain name otherwise.
    #[must_use]
    pub fn display_name(&self, country: &Country) -> String {
        self.highlight_for(country)
            .map_or_else(|| country.name.clone(), NameHighlight::markup)
    }

    /// Results-count label, e.g. `"3 results"` / `"1 result"`.
    #[must_use]
    pub fn count_label(&self) -> String {
        let n = self.len();
        format!("{n} result{}", if n == 1 { "" } else { "s" })
    }
}

/// What: Apply region and text filters over the index.
///
/// Inputs:
/// - `index`: The country index (source order preserved).
/// - `region`: Exact region to keep; empty or [`REGION_ALL`] disables the
///   region filter.
/// - `query`: Search text; trimmed and case-folded, empty disables the text
///   filter.
///
/// Output:
/// - A [`FilterOutcome`] with the surviving records and the name-highlight
///   map. Zero matches yield an empty outcome, which is distinct from "not
///   yet loaded" (an empty index).
///
/// Details:
/// - The region comparison is case-sensitive and exact: `"Europe"` keeps
///   neither `"europe"` nor `"Eastern Europe"`.
/// - A record survives the text filter when its folded name, capital or
///   native name contains the folded query. Only name matches produce a
///   highlight; capital/native-only matches do not.
#[must_use]
pub fn filter<'a>(index: &'a CountryIndex, region: &str, query: &str) -> FilterOutcome<'a> {
    let mut items: Vec<&Country> = index.all().iter().collect();
    if !region.is_empty() && region != REGION_ALL {
        items.retain(|c| c.region == region);
    }

    let q = query.trim().to_lowercase();
    let mut highlights = HashMap::new();
    if !q.is_empty() {
        items.retain(|c| {
            if let Some((start, end)) = find_fold(&c.name, &q) {
                highlights.insert(
                    c.alpha3_code.clone(),
                    NameHighlight::from_range(&c.name, start, end),
                );
                return true;
            }
            contains_fold(&c.capital, &q) || contains_fold(&c.native_name, &q)
        });
    }

    FilterOutcome { items, highlights }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, region: &str, capital: &str, alpha3: &str) -> Country {
        Country {
            name: name.to_string(),
            region: region.to_string(),
            capital: capital.to_string(),
            alpha3_code: alpha3.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> CountryIndex {
        CountryIndex::new(vec![
            country("Germany", "Europe", "Berlin", "DEU"),
            country("Oman", "Asia", "Muscat", "OMN"),
            country("Peru", "Americas", "Lima", "PER"),
            Country {
                name: "Ukraine".into(),
                region: "Eastern Europe".into(),
                capital: "Kyiv".into(),
                alpha3_code: "UKR".into(),
                ..Default::default()
            },
            Country {
                name: "Spain".into(),
                region: "Europe".into(),
                capital: "Madrid".into(),
                alpha3_code: "ESP".into(),
                native_name: "España".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    /// What: Region filtering is exact and case-sensitive.
    ///
    /// Inputs:
    /// - Regions "Europe", "europe" and "Eastern Europe" in the index.
    ///
    /// Output:
    /// - Filtering by "Europe" keeps only the exact matches; "europe"
    ///   matches nothing; "all" and "" disable the filter.
    fn region_filter_exactness() {
        let idx = sample();
        let out = filter(&idx, "Europe", "");
        let names: Vec<&str> = out.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Germany", "Spain"]);

        assert!(filter(&idx, "europe", "").is_empty());
        assert_eq!(filter(&idx, REGION_ALL, "").len(), idx.len());
        assert_eq!(filter(&idx, "", "").len(), idx.len());
    }

    #[test]
    /// What: Substring search over the name yields an escaped highlight.
    ///
    /// Inputs:
    /// - Record named "Germany", query "man".
    ///
    /// Output:
    /// - Record survives; highlight parts are "Ger" + "man" + "y" and the
    ///   markup wraps the match in `<mark>`.
    fn search_name_highlight() {
        let idx = sample();
        let out = filter(&idx, "", "man");
        let names: Vec<&str> = out.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Germany", "Oman"]);

        let hl = out.highlight_for(out.items[0]).expect("name highlight");
        assert_eq!(
            hl,
            &NameHighlight {
                prefix: "Ger".into(),
                matched: "man".into(),
                suffix: "y".into(),
            }
        );
        assert_eq!(hl.markup(), "Ger<mark>man</mark>y");
        assert_eq!(out.display_name(out.items[0]), "Ger<mark>man</mark>y");
    }

    #[test]
    /// What: Matching on capital or native name alone produces no highlight.
    ///
    /// Inputs:
    /// - Query "lima" (matches Peru's capital only); query "españa"
    ///   (matches Spain's native name only).
    ///
    /// Output:
    /// - Records survive without a name highlight; display name is plain.
    fn capital_and_native_match_without_highlight() {
        let idx = sample();
        let out = filter(&idx, "", "lima");
        assert_eq!(out.len(), 1);
        assert!(out.highlight_for(out.items[0]).is_none());
        assert_eq!(out.display_name(out.items[0]), "Peru");

        let out = filter(&idx, "", "españa");
        assert_eq!(out.len(), 1);
        assert_eq!(out.items[0].name, "Spain");
        assert!(out.highlights.is_empty());
    }

    #[test]
    /// What: Highlights never leak between filter passes.
    ///
    /// Inputs:
    /// - A query matching Germany by name, then a query matching Peru only.
    ///
    /// Output:
    /// - The second outcome carries no annotation for Germany.
    fn refilter_has_no_stale_highlights() {
        let idx = sample();
        let first = filter(&idx, "", "man");
        assert!(first.highlights.contains_key("DEU"));

        let second = filter(&idx, "", "peru");
        assert!(!second.highlights.contains_key("DEU"));
        assert_eq!(second.len(), 1);
        assert!(second.highlights.contains_key("PER"));
    }

    #[test]
    /// What: An empty or whitespace-only query disables text filtering.
    ///
    /// Inputs:
    /// - Queries "" and "   " with and without a region filter.
    ///
    /// Output:
    /// - The full (region-filtered) set comes back, with no highlights.
    fn empty_query_after_trim() {
        let idx = sample();
        let out = filter(&idx, "", "   ");
        assert_eq!(out.len(), idx.len());
        assert!(out.highlights.is_empty());

        let out = filter(&idx, "Europe", " \t");
        assert_eq!(out.len(), 2);
    }

    #[test]
    /// What: Region and text filters compose; escaping covers markup chars.
    ///
    /// Inputs:
    /// - A record whose name contains `&`, query matching it.
    ///
    /// Output:
    /// - Highlight parts are independently escaped.
    fn highlight_escapes_markup_characters() {
        let idx = CountryIndex::new(vec![country(
            "Trinidad & Tobago",
            "Americas",
            "Port of Spain",
            "TTO",
        )]);
        let out = filter(&idx, "Americas", "tobago");
        let hl = out.highlight_for(out.items[0]).expect("highlight");
        assert_eq!(hl.prefix, "Trinidad &amp; ");
        assert_eq!(hl.matched, "Tobago");
        assert_eq!(hl.suffix, "");
    }

    #[test]
    fn count_label_pluralizes() {
        let idx = sample();
        assert_eq!(filter(&idx, "", "peru").count_label(), "1 result");
        assert_eq!(filter(&idx, "", "man").count_label(), "2 results");
        assert_eq!(filter(&idx, "", "zzz").count_label(), "0 results");
    }
}
