//! Core value types used by Geodex state.

/// Flag image references for a country.
///
/// The upstream dataset carries both a plain `flag` string and a `flags`
/// object; either may be empty depending on the source snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Flags {
    /// PNG flag image URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub png: String,
    /// SVG flag image URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub svg: String,
}

/// A currency in use in a country.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Currency {
    /// ISO 4217 currency code (e.g., "PEN").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Human-readable currency name (e.g., "Peruvian sol").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Currency symbol (e.g., "S/.").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub symbol: String,
}

/// A language spoken in a country.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    /// Language name in English (e.g., "Spanish").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Language name in the language itself (e.g., "Español").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub native_name: String,
}

/// One country record as delivered by the data sources.
///
/// The field names mirror the upstream JSON (camelCase on the wire). All
/// fields are defaulted so partial records parse instead of failing the whole
/// dataset; code fields may therefore be empty and must be treated as
/// "no such code" rather than as a valid lookup key.
///
/// Any of the three code fields (`alpha3_code`, `alpha2_code`, `cioc`) may be
/// used as a lookup key; uniqueness of each across a dataset is assumed, not
/// enforced.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Country {
    /// Primary display name in English.
    pub name: String,
    /// ISO 3166-1 alpha-2 code (e.g., "PE").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alpha2_code: String,
    /// ISO 3166-1 alpha-3 code (e.g., "PER").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alpha3_code: String,
    /// Olympic-style (IOC) code (e.g., "PER"); often equal to alpha-3 but
    /// not always, and absent for some territories.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cioc: String,
    /// Name in the country's own language.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub native_name: String,
    /// Capital city name; empty for a few territories.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub capital: String,
    /// Continent-level region (e.g., "Americas").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    /// Finer-grained subregion (e.g., "South America").
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subregion: String,
    /// Population count.
    pub population: u64,
    /// Plain flag reference (emoji or URL, source-dependent).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub flag: String,
    /// Flag image URLs.
    pub flags: Flags,
    /// Top-level internet domains (e.g., [".pe"]).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_level_domain: Vec<String>,
    /// Currencies in use.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub currencies: Vec<Currency>,
    /// Languages spoken.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<Language>,
    /// Alpha-3 codes of bordering countries, in source order. Each is
    /// expected, but not guaranteed, to resolve within the same dataset.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub borders: Vec<String>,
}

impl Country {
    /// Preferred flag image reference: the PNG URL when present, else the
    /// plain `flag` field.
    #[must_use]
    pub fn flag_ref(&self) -> &str {
        if self.flags.png.is_empty() {
            &self.flag
        } else {
            &self.flags.png
        }
    }
}
