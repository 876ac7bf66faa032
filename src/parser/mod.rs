pub mod extract;
pub mod markup;

use tracing::{debug, trace};

/// A `(word, translation)` pair straight off the page, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPair {
    pub word: String,
    pub translation: String,
}

impl RawPair {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        RawPair {
            word: word.into(),
            translation: translation.into(),
        }
    }
}

type Strategy = fn(&str) -> Vec<RawPair>;

/// Tried in order; the first one that yields anything wins the page.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("column_table", extract::column_table::extract),
    ("table_rows", extract::table_rows::extract),
    ("list_items", extract::list_items::extract),
    ("definitions", extract::definitions::extract),
    ("inline", extract::inline::extract),
    ("lines", extract::lines::extract),
];

/// Extract vocabulary pairs from one page. An empty result means no layout
/// matched; that is not an error.
pub fn parse_vocab_page(html: &str, url: &str) -> Vec<RawPair> {
    for &(name, strategy) in STRATEGIES {
        let pairs = strategy(html);
        if !pairs.is_empty() {
            debug!(url, strategy = name, pairs = pairs.len(), "page parsed");
            return pairs;
        }
        trace!(url, strategy = name, "no match");
    }
    debug!(url, "no extraction strategy matched");
    Vec::new()
}

// ── Tests ──
