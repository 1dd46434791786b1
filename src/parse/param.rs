//! `<param>` value extraction from a normalized object block.

use memchr::memmem;

/// Extract the value of the `<param>` whose `name` attribute equals `key`.
///
/// After normalization a param tag reads `name="<key>"value="<value>"` with
/// no separator between the attributes, so the lookup is one concatenated
/// literal. Returns `None` when the pattern or its terminating quote is
/// missing; the value itself comes back raw — no unescaping, no entity
/// decoding.
pub(crate) fn extract(block: &str, key: &str) -> Option<String> {
    let pattern = format!("name=\"{key}\"value=\"");
    let start = memmem::find(block.as_bytes(), pattern.as_bytes())? + pattern.len();
    let rest = &block[start..];
    let end = memchr::memchr(b'"', rest.as_bytes())?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_value() {
        let block = "<object><paramname=\"name\"value=\"intro\"></object>";
        assert_eq!(extract(block, "name").as_deref(), Some("intro"));
    }

    #[test]
    fn picks_the_requested_key() {
        let block = "name=\"name\"value=\"intro\"name=\"local\"value=\"intro.htm\"";
        assert_eq!(extract(block, "local").as_deref(), Some("intro.htm"));
        assert_eq!(extract(block, "name").as_deref(), Some("intro"));
    }

    #[test]
    fn missing_key_is_none() {
        assert_eq!(extract("name=\"name\"value=\"intro\"", "local"), None);
    }

    #[test]
    fn missing_terminating_quote_is_none() {
        assert_eq!(extract("name=\"name\"value=\"intro", "name"), None);
    }

    #[test]
    fn empty_value_comes_back_empty() {
        assert_eq!(extract("name=\"name\"value=\"\"", "name").as_deref(), Some(""));
    }

    #[test]
    fn value_is_raw() {
        // No entity decoding, no unescaping
        let block = "name=\"name\"value=\"a&amp;b\"";
        assert_eq!(extract(block, "name").as_deref(), Some("a&amp;b"));
    }
}
