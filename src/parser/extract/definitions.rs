use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::{has_hangul, strip_html};
use crate::parser::RawPair;

static DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<dt[^>]*>(.*?)</dt>\s*<dd[^>]*>(.*?)</dd>").unwrap()
});

pub fn extract(html: &str) -> Vec<RawPair> {
    DEF_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let term = strip_html(&caps[1]);
            if !has_hangul(&term) {
                return None;
            }
            Some(RawPair::new(term, strip_html(&caps[2])))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_and_description() {
        let html = "<dl>\
            <dt>가정</dt>\n  <dd>home, household</dd>\
            <dt>Note</dt><dd>ignored</dd>\
            <dt><b>가치</b></dt><dd><i>value</i></dd>\
            </dl>";
        assert_eq!(
            extract(html),
            vec![
                RawPair::new("가정", "home, household"),
                RawPair::new("가치", "value"),
            ]
        );
    }

    #[test]
    fn unpaired_term() {
        assert!(extract("<dl><dt>가정</dt><p>home</p></dl>").is_empty());
    }
}
