use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::strip_html_lines;
use crate::parser::RawPair;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+[.)]\s*([가-힣][^\-–—]{1,20})\s*[-–—]\s*([a-zA-Z].{2,100})").unwrap()
});

/// Last resort: numbered `N. 단어 - gloss` lines anywhere in the page text.
pub fn extract(html: &str) -> Vec<RawPair> {
    let text = strip_html_lines(html);
    text.lines()
        .filter_map(|line| {
            let caps = LINE_RE.captures(line)?;
            Some(RawPair::new(caps[1].trim(), caps[2].trim()))
        })
        .collect()
}
