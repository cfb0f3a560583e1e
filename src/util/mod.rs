//! Small utility helpers for escaping, number formatting, and case-folded
//! substring matching.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free to keep hot paths fast and reduce compile times. They are
//! used by the query engine and the presentation glue.

pub mod config;

/// What: Escape a string for safe embedding in HTML-like markup.
///
/// Inputs:
/// - `input`: Raw text.
///
/// Output:
/// - Returns the text with `&`, `<` and `>` replaced by entities.
///
/// Details:
/// - Only the three characters that can open or close markup are escaped;
///   quotes are left alone because the output is used as element content,
///   never as an attribute value.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// What: Format an unsigned number with `,` thousands separators.
///
/// Inputs:
/// - `n`: Value to format (e.g., a population count).
///
/// Output:
/// - Returns the grouped decimal representation (e.g., `32,971,854`).
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// What: Match one case-folded needle against the start of `rest`.
///
/// Inputs:
/// - `rest`: Haystack tail to match at.
/// - `needle_lower`: Needle, already lowercased.
///
/// Output:
/// - `Some(byte_len)` of the matched prefix of `rest`, or `None`.
///
/// Details:
/// - Haystack characters are folded one at a time; the needle must consume
///   every character's full folding, so a match never splits a character
///   whose lowercase form expands to several characters.
fn match_len_at(rest: &str, needle_lower: &str) -> Option<usize> {
    let mut want = needle_lower.chars();
    let mut pending = want.next();
    let mut consumed = 0usize;
    for ch in rest.chars() {
        pending?;
        for folded in ch.to_lowercase() {
            match pending {
                Some(w) if w == folded => pending = want.next(),
                _ => return None,
            }
        }
        consumed += ch.len_utf8();
        if pending.is_none() {
            return Some(consumed);
        }
    }
    None
}

/// What: Find the first case-insensitive occurrence of `needle_lower` in
/// `haystack`.
///
/// Inputs:
/// - `haystack`: Text to search, in its original casing.
/// - `needle_lower`: Needle, already trimmed and lowercased.
///
/// Output:
/// - `Some((start, end))` byte range of the match in `haystack`, or `None`
///   when the needle is empty or absent.
///
/// Details:
/// - The returned range always falls on character boundaries of the original
///   string, so it is safe to slice for highlight annotations even when the
///   name contains multi-byte characters.
#[must_use]
pub fn find_fold(haystack: &str, needle_lower: &str) -> Option<(usize, usize)> {
    if needle_lower.is_empty() {
        return None;
    }
    for (start, _) in haystack.char_indices() {
        if let Some(len) = match_len_at(&haystack[start..], needle_lower) {
            return Some((start, start + len));
        }
    }
    None
}

/// What: Case-folded substring containment check.
///
/// Inputs:
/// - `haystack`: Text to search.
/// - `needle_lower`: Needle, already lowercased.
///
/// Output:
/// - `true` when the lowercased haystack contains the needle.
#[must_use]
pub fn contains_fold(haystack: &str, needle_lower: &str) -> bool {
    !needle_lower.is_empty() && haystack.to_lowercase().contains(needle_lower)
}
