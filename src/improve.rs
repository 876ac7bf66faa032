use crate::overrides::OverrideTables;
use crate::store::{Translations, VocabEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub word: String,
    pub before: String,
    pub after: String,
}

/// CJK punctuation through unified ideographs, plus the Hangul syllable block.
fn is_cjk(c: char) -> bool {
    matches!(c, '\u{3000}'..='\u{9FFF}' | '\u{AC00}'..='\u{D7FF}')
}

pub fn has_cjk(s: &str) -> bool {
    s.chars().any(is_cjk)
}

/// Reduce a comma-separated gloss to one term.
///
/// Overridden words take the curated value; a leading romanization segment is
/// dropped in favour of the rest; otherwise the first segment is kept.
pub fn simplify(word: &str, trans: &str, tables: &OverrideTables) -> String {
    if trans.is_empty() || !trans.contains(',') {
        return trans.to_string();
    }
    if let Some(over) = tables.simplify.get(word) {
        return over.to_string();
    }

    let parts: Vec<&str> = trans.split(',').map(str::trim).collect();
    let first = parts[0];
    if tables.romanizations.contains(first) {
        return parts[1..].join(", ").trim().to_string();
    }
    first.trim_end_matches('.').to_string()
}

pub fn shorten(word: &str, trans: &str, tables: &OverrideTables) -> String {
    tables
        .shorten
        .get(word)
        .map(|s| s.to_string())
        .unwrap_or_else(|| trans.to_string())
}

/// zh/ja fields that hold English placeholder text follow the new English value.
fn mirror_placeholders(translations: &mut Translations, en: &str) {
    for field in [&mut translations.zh, &mut translations.ja] {
        if let Some(val) = field {
            if !val.is_empty() && !has_cjk(val) {
                *val = en.to_string();
            }
        }
    }
}

/// Run both passes over every entry, in place. Returns what changed.
pub fn improve_entries(entries: &mut [VocabEntry], tables: &OverrideTables) -> Vec<Change> {
    let mut changes = Vec::new();

    for entry in entries.iter_mut() {
        let original = entry.translations.en.clone();
        let simplified = simplify(&entry.word, &original, tables);
        let improved = shorten(&entry.word, &simplified, tables);

        if improved != original {
            mirror_placeholders(&mut entry.translations, &improved);
            entry.translations.en = improved.clone();
            changes.push(Change {
                word: entry.word.clone(),
                before: original,
                after: improved,
            });
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Level;

    fn entry(word: &str, en: &str, zh: Option<&str>, ja: Option<&str>) -> VocabEntry {
        VocabEntry {
            word: word.into(),
            level: Level::Beginner,
            pos: Some("noun".into()),
            translations: Translations {
                en: en.into(),
                zh: zh.map(String::from),
                ja: ja.map(String::from),
                ..Default::default()
            },
        }
    }

    #[test]
    fn simplify_override_wins() {
        let t = OverrideTables::builtin();
        assert_eq!(simplify("고추장", "Kochujang, red pepper paste", &t), "red pepper paste");
    }

    #[test]
    fn simplify_drops_romanization() {
        let t = OverrideTables::builtin();
        assert_eq!(
            simplify("비빔", "Bibimbap, mixed rice with vegetables", &t),
            "mixed rice with vegetables"
        );
        assert_eq!(
            simplify("갈비찜", "Galvi ,  braised ribs, Korean style ", &t),
            "braised ribs, Korean style"
        );
    }

    #[test]
    fn simplify_keeps_first_term() {
        let t = OverrideTables::builtin();
        assert_eq!(simplify("쉽다", "simple, easy", &t), "simple");
        assert_eq!(simplify("등", "etc., and so on", &t), "etc");
    }

    #[test]
    fn simplify_leaves_plain_values() {
        let t = OverrideTables::builtin();
        assert_eq!(simplify("고추장", "red pepper paste", &t), "red pepper paste");
        assert_eq!(simplify("가", "", &t), "");
    }

    #[test]
    fn shorten_lookup() {
        let t = OverrideTables::builtin();
        assert_eq!(
            shorten("붕어빵", "baked bread with red beans inside (street food)", &t),
            "fish-shaped pastry"
        );
        assert_eq!(shorten("가격", "price", &t), "price");
    }

    #[test]
    fn both_passes_and_mirroring() {
        let t = OverrideTables::builtin();
        let mut entries = vec![
            entry("쉽다", "simple, easy", Some("简单"), Some("simple, easy")),
            entry("추석", "Korean thanksgiving, harvest festival", Some(""), None),
            entry("가격", "price", Some("price"), Some("価格")),
        ];
        let changes = improve_entries(&mut entries, &t);

        assert_eq!(changes.len(), 2);
        assert_eq!(entries[0].translations.en, "simple");
        assert_eq!(entries[0].translations.zh.as_deref(), Some("简单"));
        assert_eq!(entries[0].translations.ja.as_deref(), Some("simple"));

        // shorten runs after simplify and wins
        assert_eq!(entries[1].translations.en, "Chuseok (harvest festival)");
        assert_eq!(entries[1].translations.zh.as_deref(), Some(""));
        assert_eq!(entries[1].translations.ja, None);

        // unchanged en leaves placeholders alone
        assert_eq!(entries[2].translations.zh.as_deref(), Some("price"));
        assert_eq!(
            changes[1],
            Change {
                word: "추석".into(),
                before: "Korean thanksgiving, harvest festival".into(),
                after: "Chuseok (harvest festival)".into(),
            }
        );
    }

    #[test]
    fn cjk_detection() {
        assert!(has_cjk("价格"));
        assert!(has_cjk("かかく"));
        assert!(has_cjk("가격"));
        assert!(!has_cjk("price"));
    }
}
