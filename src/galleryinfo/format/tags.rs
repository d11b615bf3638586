//! Parsing of the `Tags` header value.

use crate::galleryinfo::types::models::TagPair;

/// Split a `Tags` value into ordered `(category, value)` pairs.
///
/// Tokens are comma separated. A token is split at its first `:`; a token
/// with no `:` or an empty category gets `default_category`. Order and
/// duplicates are kept.
///
/// ```
/// # use galleryinfo_parser::{parse_tags, TagPair};
/// let tags = parse_tags("artist:foo, bar", "untagged");
/// assert_eq!(tags, vec![TagPair::new("artist", "foo"), TagPair::new("untagged", "bar")]);
/// ```
pub fn parse_tags(value: &str, default_category: &str) -> Vec<TagPair> {
    value
        .split(',')
        .map(|token| match token.split_once(':') {
            Some((category, value)) => {
                let category = category.trim();
                let category = if category.is_empty() {
                    default_category
                } else {
                    category
                };
                TagPair::new(category, value.trim())
            }
            None => TagPair::new(default_category, token.trim()),
        })
        .collect()
}
