//! Pattern Matcher: character -> first pattern whose name contains it

use crate::patterns::PatternDictionary;

/// First pattern name (in dictionary order) whose lower-cased form contains `ch`.
///
/// `ch` is expected to be lower-cased already. Linear scan, no index.
pub fn find_pattern_for_character<'a>(dict: &'a PatternDictionary, ch: &str) -> Option<&'a str> {
    dict.names().find(|name| name.to_lowercase().contains(ch))
}
