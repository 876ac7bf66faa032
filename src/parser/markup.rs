use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:p|div|li|tr|td|th|dt|dd|h[1-6]|ul|ol|table)\s*>").unwrap()
});
static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]\s*").unwrap());

/// Hangul syllable block, U+AC00..=U+D7A3.
pub fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

pub fn has_hangul(s: &str) -> bool {
    s.chars().any(is_hangul)
}

pub fn decode_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
}

/// Markup to a single line of text: tags become spaces, entities decoded,
/// whitespace collapsed.
pub fn strip_html(s: &str) -> String {
    let untagged = TAG_RE.replace_all(s, " ");
    let decoded = decode_entities(&untagged);
    WS_RE.replace_all(&decoded, " ").trim().to_string()
}

/// Like [`strip_html`] but keeps line structure: `<br>` and closing block
/// tags end a line. Blank lines are dropped.
pub fn strip_html_lines(s: &str) -> String {
    let broken = BREAK_RE.replace_all(s, "\n");
    let untagged = TAG_RE.replace_all(&broken, " ");
    let decoded = decode_entities(&untagged);
    decoded
        .lines()
        .map(|l| WS_RE.replace_all(l, " ").trim().to_string())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop a leading `12.` / `12)` ordinal.
pub fn strip_ordinal(s: &str) -> &str {
    match ORDINAL_RE.find(s) {
        Some(m) => &s[m.end()..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_detection() {
        assert!(has_hangul("사과"));
        assert!(has_hangul("1. 가격"));
        assert!(!has_hangul("apple"));
        // Jamo and CJK ideographs are outside the syllable block
        assert!(!has_hangul("ㄱㄴ"));
        assert!(!has_hangul("价格"));
    }

    #[test]
    fn strip_tags_and_entities() {
        assert_eq!(
            strip_html("<b>rock</b> &amp; <i>roll</i>&nbsp;&#39;n&#39; &quot;x&quot;"),
            "rock & roll 'n' \"x\""
        );
        assert_eq!(strip_html("  <p>\n a \n\t b </p> "), "a b");
    }

    #[test]
    fn strip_keeps_lines() {
        let text = strip_html_lines("<p>1. 사과 - apple</p><p>2. 배 - pear<br/>3. 감 - persimmon</p>");
        assert_eq!(text, "1. 사과 - apple\n2. 배 - pear\n3. 감 - persimmon");
    }

    #[test]
    fn ordinal() {
        assert_eq!(strip_ordinal("12. 가격"), "가격");
        assert_eq!(strip_ordinal("3)가방"), "가방");
        assert_eq!(strip_ordinal("가방"), "가방");
    }
}
