use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::strip_html;
use crate::parser::RawPair;

static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").unwrap());
static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[.)]\s*)?([가-힣\s]+?)\s*[-–—:]\s*(.+)$").unwrap()
});

/// Longer captures are whole example sentences, not glosses.
pub const MAX_TRANSLATION_CHARS: usize = 150;

/// `<li>1. 가격 - price</li>`
pub fn extract(html: &str) -> Vec<RawPair> {
    ITEM_RE
        .captures_iter(html)
        .filter_map(|item| {
            let text = strip_html(&item[1]);
            let caps = ENTRY_RE.captures(&text)?;
            let word = caps[1].trim();
            let translation = caps[2].trim();
            if word.is_empty()
                || translation.is_empty()
                || translation.chars().count() >= MAX_TRANSLATION_CHARS
            {
                return None;
            }
            Some(RawPair::new(word, translation))
        })
        .collect()
}
