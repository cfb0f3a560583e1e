//! Navigation between the list view and the country detail view.
//!
//! Models the browser-style location/history contract: every location entry
//! carries a view and an optional `code` parameter, and back/forward moves a
//! cursor over the entry stack. Resolving the current entry against the
//! country index yields three distinguishable outcomes so the presentation
//! can tell "no country selected" apart from "country not found".

use crate::index::CountryIndex;
use crate::state::Country;

/// Which page-level view a location entry shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// The searchable country list.
    #[default]
    List,
    /// The single-country detail view.
    Detail,
}

/// One location entry: a view plus its optional `code` parameter.
///
/// The `code` unifies the query parameter and the preserved history state;
/// on back/forward the entry under the cursor already carries the value to
/// re-resolve from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    /// The view this entry shows.
    pub view: View,
    /// Country code parameter, when the entry points at a detail view.
    pub code: Option<String>,
}

/// Outcome of resolving the current location against the index.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// No `code` parameter in the current location.
    NoneSelected,
    /// A `code` was present but matches nothing in the index.
    NotFound(String),
    /// The code resolved to this record.
    Found(&'a Country),
}

/// How a navigation request was carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMove {
    /// Already on the detail view: a history entry was pushed and the caller
    /// re-renders in place, without a full reload.
    InPlace,
    /// Coming from another view: a full navigation to the detail view.
    FullLoad,
}

/// History of location entries with a cursor, written by navigation and read
/// by [`Navigator::resolve_current`].
#[derive(Debug)]
pub struct Navigator {
    /// Location entries, oldest first.
    entries: Vec<Entry>,
    /// Index of the current entry.
    cursor: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Fresh history positioned on the list view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::default()],
            cursor: 0,
        }
    }

    /// Fresh history positioned on the detail view, as when the detail page
    /// is opened directly with (or without) a `code` query parameter.
    #[must_use]
    pub fn open_detail(code: Option<String>) -> Self {
        Self {
            entries: vec![Entry {
                view: View::Detail,
                code,
            }],
            cursor: 0,
        }
    }

    /// The current location entry.
    #[must_use]
    pub fn current(&self) -> &Entry {
        &self.entries[self.cursor]
    }

    /// What: Resolve the current location's code against the index.
    ///
    /// Inputs:
    /// - `index`: The country index.
    ///
    /// Output:
    /// - [`Resolution::NoneSelected`] without a code,
    ///   [`Resolution::NotFound`] for an unresolvable code, else
    ///   [`Resolution::Found`].
    #[must_use]
    pub fn resolve_current<'a>(&self, index: &'a CountryIndex) -> Resolution<'a> {
        match &self.current().code {
            None => Resolution::NoneSelected,
            Some(code) => index
                .find_by_code(code)
                .map_or_else(|| Resolution::NotFound(code.clone()), Resolution::Found),
        }
    }

    /// What: Navigate to a country's detail view.
    ///
    /// Inputs:
    /// - `country`: Target record (typically a resolved border link).
    ///
    /// Output:
    /// - [`NavMove::InPlace`] when already on a detail view (history entry
    ///   pushed, no reload); [`NavMove::FullLoad`] otherwise.
    ///
    /// Details:
    /// - Pushing discards any forward entries beyond the cursor, as browser
    ///   history does.
    pub fn navigate_to(&mut self, country: &Country) -> NavMove {
        let from_detail = self.current().view == View::Detail;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Entry {
            view: View::Detail,
            code: Some(country.alpha3_code.clone()),
        });
        self.cursor = self.entries.len() - 1;
        if from_detail {
            NavMove::InPlace
        } else {
            NavMove::FullLoad
        }
    }

    /// Move one entry back; `false` when already at the oldest entry. The
    /// caller re-resolves via [`Navigator::resolve_current`].
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move one entry forward; `false` when already at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> CountryIndex {
        CountryIndex::new(vec![
            Country {
                name: "Peru".into(),
                alpha3_code: "PER".into(),
                ..Default::default()
            },
            Country {
                name: "Bolivia".into(),
                alpha3_code: "BOL".into(),
                ..Default::default()
            },
        ])
    }

    #[test]
    /// What: The three resolution outcomes stay distinguishable.
    ///
    /// Inputs:
    /// - Detail locations without a code, with an unknown code, and with a
    ///   resolvable code.
    ///
    /// Output:
    /// - NoneSelected, NotFound (carrying the code), and Found respectively.
    fn resolve_current_three_outcomes() {
        let idx = index();
        let nav = Navigator::open_detail(None);
        assert_eq!(nav.resolve_current(&idx), Resolution::NoneSelected);

        let nav = Navigator::open_detail(Some("XXX".into()));
        assert_eq!(
            nav.resolve_current(&idx),
            Resolution::NotFound("XXX".into())
        );

        let nav = Navigator::open_detail(Some("BOL".into()));
        match nav.resolve_current(&idx) {
            Resolution::Found(c) => assert_eq!(c.name, "Bolivia"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    /// What: Border-link navigation pushes in place on a detail view and
    /// reports a full load from the list view.
    ///
    /// Inputs:
    /// - Navigate from the list, then between detail views.
    ///
    /// Output:
    /// - FullLoad first, InPlace afterwards; the current entry follows.
    fn navigate_to_inplace_vs_fullload() {
        let idx = index();
        let peru = idx.find_by_code("PER").expect("Peru");
        let bolivia = idx.find_by_code("BOL").expect("Bolivia");

        let mut nav = Navigator::new();
        assert_eq!(nav.navigate_to(peru), NavMove::FullLoad);
        assert_eq!(nav.current().code.as_deref(), Some("PER"));

        assert_eq!(nav.navigate_to(bolivia), NavMove::InPlace);
        assert_eq!(nav.current().code.as_deref(), Some("BOL"));
    }

    #[test]
    /// What: Back and forward re-resolve from preserved entries; pushing
    /// discards the forward tail.
    ///
    /// Inputs:
    /// - Push two detail entries, walk back, then push again.
    ///
    /// Output:
    /// - Back reaches the earlier entries, forward fails once the tail was
    ///   discarded by the new push.
    fn back_forward_and_truncate() {
        let idx = index();
        let peru = idx.find_by_code("PER").expect("Peru");
        let bolivia = idx.find_by_code("BOL").expect("Bolivia");

        let mut nav = Navigator::open_detail(Some("PER".into()));
        nav.navigate_to(bolivia);
        assert!(nav.back());
        assert_eq!(nav.current().code.as_deref(), Some("PER"));
        assert!(nav.forward());
        assert_eq!(nav.current().code.as_deref(), Some("BOL"));
        assert!(!nav.forward());

        assert!(nav.back());
        nav.navigate_to(peru); // discards the BOL forward entry
        assert_eq!(nav.current().code.as_deref(), Some("PER"));
        assert!(!nav.forward());

        // Walk to the oldest entry; further back is refused.
        assert!(nav.back());
        assert!(!nav.back());
    }
}
