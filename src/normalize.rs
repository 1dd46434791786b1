//! Input normalization — lowercase everything and strip whitespace so the
//! scanner can match tags and attributes as plain substrings.
//!
//! Stripping is global: whitespace inside displayed titles is lost too. The
//! `.hhc` format never carries meaningful internal whitespace in the fields
//! we extract, so the tradeoff holds.

/// Lowercase `raw` and delete every newline, carriage return, tab, and space.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        if !matches!(c, '\n' | '\r' | '\t' | ' ') {
            out.push(c);
        }
    }
    out
}
