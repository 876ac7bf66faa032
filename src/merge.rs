use std::collections::{HashMap, HashSet};

use crate::store::{Level, VocabEntry};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// In both files: new English, old zh/ja.
    pub updated: usize,
    /// Only in the new file.
    pub added: usize,
    /// Only in the old file.
    pub kept_old: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOverlap {
    pub level: Level,
    pub old: usize,
    pub new: usize,
    pub both: usize,
    pub only_new: usize,
    pub only_old: usize,
}

fn at_level(entries: &[VocabEntry], level: Level) -> impl Iterator<Item = &VocabEntry> {
    entries.iter().filter(move |e| e.level == level)
}

fn words_at(entries: &[VocabEntry], level: Level) -> HashSet<&str> {
    at_level(entries, level).map(|e| e.word.as_str()).collect()
}

/// Per-level word overlap between the two collections, before merging.
pub fn overlap(old: &[VocabEntry], new: &[VocabEntry]) -> Vec<LevelOverlap> {
    Level::ALL
        .iter()
        .map(|&level| {
            let old_words = words_at(old, level);
            let new_words = words_at(new, level);
            LevelOverlap {
                level,
                old: at_level(old, level).count(),
                new: at_level(new, level).count(),
                both: old_words.intersection(&new_words).count(),
                only_new: new_words.difference(&old_words).count(),
                only_old: old_words.difference(&new_words).count(),
            }
        })
        .collect()
}

pub fn apply_level(entries: &mut [VocabEntry], level: Level) {
    for e in entries.iter_mut() {
        e.level = level;
    }
}

fn reconcile(old: &VocabEntry, new: VocabEntry) -> VocabEntry {
    let mut translations = old.translations.clone();
    translations.en = new.translations.en;
    translations.zh.get_or_insert_with(String::new);
    translations.ja.get_or_insert_with(String::new);

    VocabEntry {
        word: new.word,
        level: new.level,
        pos: new
            .pos
            .filter(|p| !p.is_empty())
            .or_else(|| old.pos.clone()),
        translations,
    }
}

/// Keyed union per level. Words in both take the new English and keep the
/// old zh/ja; zh/ja in the new file are ignored for those words. Each level
/// is sorted by word, levels ascending.
pub fn merge(old: Vec<VocabEntry>, new: Vec<VocabEntry>) -> (Vec<VocabEntry>, MergeStats) {
    let mut stats = MergeStats::default();
    let mut out = Vec::with_capacity(old.len() + new.len());

    for level in Level::ALL {
        let old_level: Vec<&VocabEntry> = at_level(&old, level).collect();
        let old_by_word: HashMap<&str, &VocabEntry> =
            old_level.iter().map(|e| (e.word.as_str(), *e)).collect();

        let mut merged = Vec::new();
        let mut new_words: HashSet<String> = HashSet::new();

        for entry in new.iter().filter(|e| e.level == level).cloned() {
            if !new_words.insert(entry.word.clone()) {
                continue;
            }
            match old_by_word.get(entry.word.as_str()) {
                Some(old_entry) => {
                    merged.push(reconcile(old_entry, entry));
                    stats.updated += 1;
                }
                None => {
                    let mut entry = entry;
                    entry.translations.zh.get_or_insert_with(String::new);
                    entry.translations.ja.get_or_insert_with(String::new);
                    merged.push(entry);
                    stats.added += 1;
                }
            }
        }

        for entry in old_level {
            if !new_words.contains(&entry.word) {
                merged.push(entry.clone());
                stats.kept_old += 1;
            }
        }

        merged.sort_by(|a, b| a.word.cmp(&b.word));
        out.extend(merged);
    }

    (out, stats)
}
