use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::models::BangDefinition;

/// Literal placeholder marker in URL templates, replaced by the encoded term
pub const PLACEHOLDER: &str = "{{{s}}}";

// Percent-encode everything except ASCII alphanumerics and the characters a
// URI component encoder leaves untouched: - _ . ! ~ * ' ( )
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a search term for substitution into a URL template
pub fn encode_search_term(term: &str) -> String {
    utf8_percent_encode(term, COMPONENT_ENCODE_SET).to_string()
}

/// Build the destination URL for a matched definition and search term.
///
/// Replaces the first occurrence of [`PLACEHOLDER`] in the definition's URL
/// template with the percent-encoded term. A template without the marker is
/// returned unchanged; no query string is appended in that case, since the
/// dataset author controls template correctness. The result is not validated
/// as a well-formed URL here.
pub fn resolve_url(def: &BangDefinition, remainder: &str) -> String {
    let encoded = encode_search_term(remainder);
    def.url_template.replacen(PLACEHOLDER, &encoded, 1)
}
