use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::markup::has_hangul;
use crate::parser::RawPair;
use crate::store::{Level, Translations, VocabEntry};

static COPULA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:be|is|are|am)\s+").unwrap());
static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:hello|goodbye|thank|please|sorry|excuse|yes|no|congratulations)").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Expression,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Expression,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Expression => "expression",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse guess from the dictionary form and the English gloss.
pub fn infer_pos(word: &str, translation: &str) -> PartOfSpeech {
    let gloss = translation.to_lowercase();
    if word.ends_with('다') {
        if COPULA_RE.is_match(&gloss) {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Verb
        }
    } else if EXPRESSION_RE.is_match(&gloss) {
        PartOfSpeech::Expression
    } else {
        PartOfSpeech::Noun
    }
}

fn clean_translation(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | ';'))
}

/// Validate, dedup (first occurrence wins) and tag raw pairs.
pub fn words_to_entries(pairs: &[RawPair], level: Level) -> Vec<VocabEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for pair in pairs {
        let word = pair.word.trim();
        let english = clean_translation(&pair.translation);
        if word.is_empty() || english.is_empty() || !has_hangul(word) {
            continue;
        }
        if !seen.insert(word.to_string()) {
            continue;
        }

        entries.push(VocabEntry {
            word: word.to_string(),
            level,
            pos: Some(infer_pos(word, english).to_string()),
            translations: Translations::english(english),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_rules() {
        assert_eq!(infer_pos("먹다", "to eat"), PartOfSpeech::Verb);
        assert_eq!(infer_pos("가볍다", "be light"), PartOfSpeech::Adjective);
        assert_eq!(infer_pos("가볍다", "Is light"), PartOfSpeech::Adjective);
        // copula needs a following word
        assert_eq!(infer_pos("이다", "is"), PartOfSpeech::Verb);
        assert_eq!(infer_pos("안녕하세요", "Hello"), PartOfSpeech::Expression);
        assert_eq!(infer_pos("감사", "thanks"), PartOfSpeech::Expression);
        assert_eq!(infer_pos("가격", "price"), PartOfSpeech::Noun);
    }

    #[test]
    fn expression_is_a_plain_prefix_match() {
        assert_eq!(infer_pos("코", "nose"), PartOfSpeech::Expression);
    }

    #[test]
    fn dedup_keeps_first() {
        let pairs = vec![
            RawPair::new("가격", "price"),
            RawPair::new("가격", "cost"),
            RawPair::new("가구", "furniture"),
        ];
        let entries = words_to_entries(&pairs, Level::Intermediate);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].translations.en, "price");
        assert_eq!(entries[1].word, "가구");
    }

    #[test]
    fn punctuation_and_rejects() {
        let pairs = vec![
            RawPair::new(" 가방 ", "bag.;"),
            RawPair::new("bag", "가방"),
            RawPair::new("가을", " ... "),
            RawPair::new("", "empty"),
            RawPair::new("가족", ", family,"),
        ];
        let entries = words_to_entries(&pairs, Level::Beginner);
        let got: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.word.as_str(), e.translations.en.as_str()))
            .collect();
        assert_eq!(got, vec![("가방", "bag"), ("가족", "family")]);
    }

    #[test]
    fn output_invariants() {
        let pairs = vec![
            RawPair::new("1. 가격", "price."),
            RawPair::new("가다", "to go;"),
            RawPair::new("네", "yes."),
        ];
        for e in words_to_entries(&pairs, Level::Intermediate) {
            assert!(has_hangul(&e.word));
            let en = &e.translations.en;
            assert!(!en.is_empty());
            assert!(!en.starts_with(['.', ',', ';']) && !en.ends_with(['.', ',', ';']));
            assert_eq!(e.level, Level::Intermediate);
            assert!(e.translations.zh.is_none() && e.translations.ja.is_none());
        }
    }

    #[test]
    fn pos_written_as_lowercase_tag() {
        let entries = words_to_entries(&[RawPair::new("가다", "to go")], Level::Beginner);
        assert_eq!(entries[0].pos.as_deref(), Some("verb"));
    }
}
