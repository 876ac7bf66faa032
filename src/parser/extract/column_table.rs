//! koreantopik.com layout: `# | Vocab | Meaning | Example | Translation`.
//!
//! The pages omit `</tr>` and `</td>`, so rows and cells are found by
//! splitting on opening tags only. The Korean word sits either inside
//! `<span lang=ko>` or directly in the cell.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::{has_hangul, strip_html};
use crate::parser::RawPair;

static ROW_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<tr[^>]*>").unwrap());
static CELL_SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<td[^>]*>").unwrap());
static KO_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<span[^>]+lang=["']?ko["']?[^>]*>(.*?)</span>"#).unwrap()
});
static LEADING_DASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-\s]+").unwrap());
static LEADING_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-\s\d.]+").unwrap());
static WRAPPED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\((.+)\)$").unwrap());

const VOCAB_COL: usize = 2;
const MEANING_COL: usize = 3;

pub fn extract(html: &str) -> Vec<RawPair> {
    let rows: Vec<&str> = ROW_SPLIT_RE.split(html).collect();
    // [0] is everything before the table, [1] the header row
    if rows.len() <= 3 {
        return Vec::new();
    }
    rows[2..].iter().filter_map(|row| parse_row(row)).collect()
}

fn parse_row(row: &str) -> Option<RawPair> {
    let cells: Vec<&str> = CELL_SPLIT_RE.split(row).collect();
    if cells.len() <= MEANING_COL {
        return None;
    }

    let word = vocab_text(cells[VOCAB_COL]);
    let meaning_text = strip_html(cells[MEANING_COL]);
    let meaning = WRAPPED_RE.replace(meaning_text.trim(), "$1").to_string();

    if word.is_empty() || meaning.is_empty() || !has_hangul(&word) {
        return None;
    }
    // Korean on the meaning side means the columns are shifted
    if has_hangul(&meaning) {
        return None;
    }
    Some(RawPair::new(word, meaning))
}

fn vocab_text(cell: &str) -> String {
    let (text, noise) = match KO_SPAN_RE.captures(cell) {
        Some(caps) => (strip_html(&caps[1]), &*LEADING_DASH_RE),
        None => (strip_html(cell), &*LEADING_NOISE_RE),
    };
    let text = text.trim_matches(|c| c == ' ' || c == '-');
    noise.replace(text, "").trim().to_string()
}
