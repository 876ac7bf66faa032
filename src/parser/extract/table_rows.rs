use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::{has_hangul, strip_html, strip_ordinal};
use crate::parser::RawPair;

static ROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap());
static CELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<t[dh][^>]*>(.*?)</t[dh]>").unwrap());

/// (word column, meaning column)
const NARROW_ROW: &[(usize, usize)] = &[(0, 1)];
const WIDE_ROW: &[(usize, usize)] = &[(0, 1), (2, 3)];

/// Well-formed `<tr>`/`<td>` tables. Wide rows pack two word/meaning pairs
/// side by side: `1. 가격 | price | 2. 가구 | furniture`.
pub fn extract(html: &str) -> Vec<RawPair> {
    let mut pairs = Vec::new();

    for row in ROW_RE.captures_iter(html) {
        let cells: Vec<String> = CELL_RE
            .captures_iter(&row[1])
            .map(|c| strip_html(&c[1]))
            .collect();

        let columns = match cells.len() {
            n if n >= 4 => WIDE_ROW,
            2 | 3 => NARROW_ROW,
            _ => continue,
        };

        pairs.extend(
            columns
                .iter()
                .filter_map(|&(w, t)| cell_pair(&cells[w], &cells[t])),
        );
    }

    pairs
}

fn cell_pair(word_cell: &str, meaning: &str) -> Option<RawPair> {
    let word = strip_ordinal(word_cell).trim();
    if !has_hangul(word) || meaning.is_empty() || is_header(meaning) {
        return None;
    }
    Some(RawPair::new(word, meaning))
}

/// `No` / `No.` column captions.
fn is_header(cell: &str) -> bool {
    cell.split_whitespace()
        .next()
        .map(|first| first.trim_end_matches('.') == "No")
        .unwrap_or(false)
}
