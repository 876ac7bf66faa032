use std::sync::LazyLock;

use regex::Regex;

use crate::parser::RawPair;

static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"<(?:p|div|span)[^>]*>\s*(?:<(?:span|b|strong)[^>]*>)?",
        r"([가-힣][^<]{0,30})</(?:span|b|strong)>?",
        r"\s*[-–—(]\s*([a-zA-Z][^<]{2,100}?)\s*</(?:p|div|span)>",
    ))
    .unwrap()
});

/// `<p><b>가격</b> - price</p>` and `<p><strong>가격</strong> (price)</p>`
pub fn extract(html: &str) -> Vec<RawPair> {
    INLINE_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let word = caps[1].trim();
            let translation = caps[2].trim().trim_end_matches(')');
            if word.is_empty() || translation.is_empty() {
                return None;
            }
            Some(RawPair::new(word, translation))
        })
        .collect()
}
