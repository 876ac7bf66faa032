use std::collections::BTreeMap;

use crate::normalize::PartOfSpeech;
use crate::store::{Level, VocabEntry};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct VocabStats {
    pub total: usize,
    pub per_level: BTreeMap<Level, usize>,
    pub per_pos: BTreeMap<String, usize>,
    pub missing_en: usize,
    /// zh absent, blank, or just a copy of the English text.
    pub untranslated_zh: usize,
    pub untranslated_ja: usize,
}

fn untranslated(value: Option<&String>, en: &str) -> bool {
    match value {
        None => true,
        Some(v) => v.trim().is_empty() || v == en,
    }
}

pub fn summarize(entries: &[VocabEntry]) -> VocabStats {
    let mut stats = VocabStats {
        total: entries.len(),
        ..Default::default()
    };

    for e in entries {
        *stats.per_level.entry(e.level).or_default() += 1;
        let pos = e.pos.clone().unwrap_or_else(|| "(none)".to_string());
        *stats.per_pos.entry(pos).or_default() += 1;

        let en = &e.translations.en;
        if en.trim().is_empty() {
            stats.missing_en += 1;
        }
        if untranslated(e.translations.zh.as_ref(), en) {
            stats.untranslated_zh += 1;
        }
        if untranslated(e.translations.ja.as_ref(), en) {
            stats.untranslated_ja += 1;
        }
    }

    stats
}

impl VocabStats {
    pub fn print(&self) {
        println!("{:<14} {:>6}", "Level", "Words");
        println!("{}", "-".repeat(21));
        for level in Level::ALL {
            let n = self.per_level.get(&level).copied().unwrap_or(0);
            println!("{:<14} {:>6}", format!("TOPIK {}", level), n);
        }
        println!("{:<14} {:>6}", "Total", self.total);

        println!("\n{:<14} {:>6}", "Part of speech", "Words");
        println!("{}", "-".repeat(21));
        let known = PartOfSpeech::ALL.iter().map(|p| p.as_str());
        for tag in known {
            if let Some(n) = self.per_pos.get(tag) {
                println!("{:<14} {:>6}", tag, n);
            }
        }
        for (tag, n) in &self.per_pos {
            if !PartOfSpeech::ALL.iter().any(|p| p.as_str() == tag) {
                println!("{:<14} {:>6}", tag, n);
            }
        }

        println!();
        println!("Empty English translation: {}", self.missing_en);
        println!("Chinese needing translation: {}", self.untranslated_zh);
        println!("Japanese needing translation: {}", self.untranslated_ja);
    }
}
