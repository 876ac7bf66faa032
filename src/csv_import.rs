use std::collections::HashSet;
use std::mem::take;

use crate::store::{Level, Translations, VocabEntry};

/// Minimal CSV reader: quoted fields, `""` escapes, CRLF. Blank lines skipped.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(take(&mut field));
                if row.iter().any(|f| !f.trim().is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    row.push(field);
    if row.iter().any(|f| !f.trim().is_empty()) {
        rows.push(row);
    }
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Word,
    Level,
    Pos,
    En,
    Zh,
    Ja,
}

fn column_for(header: &str) -> Option<Column> {
    match header.trim().to_lowercase().as_str() {
        "word" | "korean" | "hangul" => Some(Column::Word),
        "level" | "topik" | "topik_level" => Some(Column::Level),
        "pos" | "part of speech" | "type" => Some(Column::Pos),
        "en" | "english" | "translation" => Some(Column::En),
        "zh" | "chinese" => Some(Column::Zh),
        "ja" | "japanese" => Some(Column::Ja),
        _ => None,
    }
}

/// Rows without a word or an English translation are skipped. Missing level
/// defaults to 1, missing pos to `noun`, missing zh/ja to the English text.
pub fn parse_csv(text: &str) -> Vec<VocabEntry> {
    let mut rows = parse_rows(text).into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let columns: Vec<Option<Column>> = header.iter().map(|h| column_for(h)).collect();

    let mut entries = Vec::new();
    for values in rows {
        if values.len() < 2 {
            continue;
        }

        let mut word = None;
        let mut level = Level::Beginner;
        let mut pos = None;
        let mut translations = Translations::default();

        for (column, value) in columns.iter().zip(&values) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match column {
                Some(Column::Word) => word = Some(value.to_string()),
                Some(Column::Level) => level = value.parse().unwrap_or(Level::Beginner),
                Some(Column::Pos) => pos = Some(value.to_lowercase()),
                Some(Column::En) => translations.en = value.to_string(),
                Some(Column::Zh) => translations.zh = Some(value.to_string()),
                Some(Column::Ja) => translations.ja = Some(value.to_string()),
                None => {}
            }
        }

        let Some(word) = word else { continue };
        if translations.en.is_empty() {
            continue;
        }
        let en = translations.en.clone();
        translations.zh.get_or_insert_with(|| en.clone());
        translations.ja.get_or_insert(en);

        entries.push(VocabEntry {
            word,
            level,
            pos: Some(pos.unwrap_or_else(|| "noun".to_string())),
            translations,
        });
    }

    entries
}

/// Append entries whose word is not already present.
pub fn merge_new_words(existing: Vec<VocabEntry>, incoming: Vec<VocabEntry>) -> Vec<VocabEntry> {
    let mut seen: HashSet<String> = existing.iter().map(|e| e.word.clone()).collect();
    let mut merged = existing;
    for entry in incoming {
        if seen.insert(entry.word.clone()) {
            merged.push(entry);
        }
    }
    merged
}

pub fn sort_by_level_then_word(entries: &mut [VocabEntry]) {
    entries.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.word.cmp(&b.word)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_with_quotes() {
        let rows = parse_rows("a,\"b, c\",\"say \"\"hi\"\"\"\r\n\r\nd,e\n");
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b, c".to_string(), "say \"hi\"".to_string()],
                vec!["d".to_string(), "e".to_string()],
            ]
        );
    }

    #[test]
    fn full_header() {
        let csv = "word,level,pos,en,zh,ja\n안녕하세요,1,Expression,Hello,你好,こんにちは\n";
        let entries = parse_csv(csv);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.word, "안녕하세요");
        assert_eq!(e.level, Level::Beginner);
        assert_eq!(e.pos.as_deref(), Some("expression"));
        assert_eq!(e.translations.zh.as_deref(), Some("你好"));
        assert_eq!(e.translations.ja.as_deref(), Some("こんにちは"));
    }

    #[test]
    fn aliases_and_defaults() {
        let csv = "Korean,TOPIK,English\n가격,2,price\n가구,7,furniture\n나무,x,tree\n";
        let entries = parse_csv(csv);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, Level::Intermediate);
        assert_eq!(entries[1].level, Level::Beginner);
        assert_eq!(entries[2].level, Level::Beginner);
        assert_eq!(entries[0].pos.as_deref(), Some("noun"));
        assert_eq!(entries[0].translations.zh.as_deref(), Some("price"));
        assert_eq!(entries[0].translations.ja.as_deref(), Some("price"));
    }

    #[test]
    fn incomplete_rows_skipped() {
        let csv = "word,level,en\n가격,2,\n,2,price\n외톨이\n가구,2,furniture\n";
        let entries = parse_csv(csv);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "가구");
    }

    #[test]
    fn merge_and_sort() {
        let existing = parse_csv("word,level,en\n나무,1,tree\n가격,2,price\n");
        let incoming = parse_csv("word,level,en\n가격,2,cost\n가다,1,to go\n");
        let mut merged = merge_new_words(existing, incoming);
        sort_by_level_then_word(&mut merged);

        let got: Vec<(&str, &str)> = merged
            .iter()
            .map(|e| (e.word.as_str(), e.translations.en.as_str()))
            .collect();
        assert_eq!(got, vec![("가다", "to go"), ("나무", "tree"), ("가격", "price")]);
    }
}
