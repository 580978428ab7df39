//! CSS selector parsing.

use scraper::Selector;

/// Parses one of the crate's constant selectors.
///
/// Only used to initialize `LazyLock<Selector>` statics, whose strings are
/// fixed at compile time and covered by the parse tests.
///
/// # Panics
///
/// Panics if `selector_str` is not valid CSS; `name` identifies the static.
pub fn parse_selector_unsafe(selector_str: &str, name: &str) -> Selector {
    match Selector::parse(selector_str) {
        Ok(selector) => selector,
        Err(e) => panic!("invalid selector {name} ({selector_str:?}): {e}; this is a programming error"),
    }
}
