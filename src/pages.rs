use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use crate::scraper::Fetcher;

pub const INDEX_URL: &str =
    "https://www.koreantopik.com/2024/09/complete-topik-2-vocabulary-list-3900.html";

/// One page per hundred words, 1-3900.
pub const PAGE_URLS: &[&str] = &[
    "https://www.koreantopik.com/2023/05/3900-vocabulary-words-for-topik-2-with.html",
    "https://www.koreantopik.com/2023/05/3900-vocabulary-words-for-topik-2-with_29.html",
    "https://www.koreantopik.com/2023/06/3900-vocabulary-words-for-topik-2-with.html",
    "https://www.koreantopik.com/2023/06/3900-vocabulary-words-for-topik-2-with_4.html",
    "https://www.koreantopik.com/2023/06/3900-vocabulary-words-for-topik-2-with_7.html",
    "https://www.koreantopik.com/2023/06/3900-vocabulary-words-for-topik-2-with_14.html",
    "https://www.koreantopik.com/2023/06/3900-vocabulary-words-for-topik-2-with_25.html",
    "https://www.koreantopik.com/2023/07/3900-vocabulary-words-for-topik-2-with.html",
    "https://www.koreantopik.com/2023/07/3900-vocabulary-words-for-topik-2-with_17.html",
    "https://www.koreantopik.com/2023/07/3900-vocabulary-words-for-topik-2-with_29.html",
    "https://www.koreantopik.com/2023/08/3900-vocabulary-words-for-topik-2-with.html",
    "https://www.koreantopik.com/2023/09/3900-vocabulary-words-for-topik-2-with.html",
    "https://www.koreantopik.com/2023/09/the-12011300th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2023/10/the-13011400th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2023/11/the-14011500th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2023/12/the-15011600th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2023/12/the-16011700th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2023/12/the-17011800th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/01/the-18011900th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/01/the-19012000th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/02/the-20012100th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/05/the-21012200th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/05/the-22012300th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/05/the-23012400th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/05/the-24012500th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/06/the-25012600th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/06/the-26012700th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/06/the-27012800th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/06/the-28012900th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/06/the-29013000th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/07/the-30013100th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/07/the-30013100th-topik-2-vocabulary-with_13.html",
    "https://www.koreantopik.com/2024/07/the-32013300th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/07/the-33013400th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/08/the-34013500th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/09/the-35013600th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/09/the-36013700th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/09/the-37013800th-topik-2-vocabulary-with.html",
    "https://www.koreantopik.com/2024/09/the-38013900th-topik-2-vocabulary-with.html",
];

static SERIES_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href=["']?(https://www\.koreantopik\.com/[^"'>\s]+3900[^"'>\s]*)["']?"#).unwrap()
});
static VOCAB_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href=["']?(https://www\.koreantopik\.com/2023/[^"'>\s]+vocabulary[^"'>\s]*)["']?"#)
        .unwrap()
});

pub fn page_urls() -> Vec<String> {
    PAGE_URLS.iter().map(|u| u.to_string()).collect()
}

/// Sub-page links on the index page, in order of first appearance.
pub fn extract_page_links(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    SERIES_LINK_RE
        .captures_iter(html)
        .chain(VOCAB_LINK_RE.captures_iter(html))
        .map(|caps| caps[1].to_string())
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// Read sub-page links off the index page; the fixed list is used when the
/// index can't be fetched or links to nothing.
pub async fn discover_page_urls(fetcher: &Fetcher) -> Vec<String> {
    info!("Fetching index page: {}", INDEX_URL);
    let links = match fetcher.fetch(INDEX_URL).await {
        Some(html) => extract_page_links(&html),
        None => Vec::new(),
    };
    if links.is_empty() {
        warn!("No sub-page links found on index page, using the fixed list");
        return page_urls();
    }
    info!("Found {} sub-page links", links.len());
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_list() {
        let urls = page_urls();
        assert_eq!(urls.len(), 39);
        assert!(urls.iter().all(|u| u.starts_with("https://www.koreantopik.com/")));
        let unique: HashSet<_> = urls.iter().collect();
        assert_eq!(unique.len(), urls.len());
    }

    #[test]
    fn index_links() {
        let html = r#"
            <a href="https://www.koreantopik.com/2023/05/3900-vocabulary-words-for-topik-2-with.html">1-100</a>
            <a href='https://www.koreantopik.com/2023/10/the-13011400th-topik-2-vocabulary-with.html'>1301-1400</a>
            <a href="https://www.koreantopik.com/2023/05/3900-vocabulary-words-for-topik-2-with.html">again</a>
            <a href="https://www.koreantopik.com/2022/01/grammar.html">grammar</a>
            <a href="https://example.com/3900">elsewhere</a>
        "#;
        assert_eq!(
            extract_page_links(html),
            vec![
                "https://www.koreantopik.com/2023/05/3900-vocabulary-words-for-topik-2-with.html",
                "https://www.koreantopik.com/2023/10/the-13011400th-topik-2-vocabulary-with.html",
            ]
        );
    }
}
