use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid vocabulary JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize vocabulary")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to back up {} to {}", from.display(), to.display())]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// TOPIK difficulty tier. Stored in JSON as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Level::Beginner),
            2 => Ok(Level::Intermediate),
            3 => Ok(Level::Advanced),
            other => Err(format!("level must be 1, 2 or 3 (got {})", other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.number()
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("level must be 1, 2 or 3 (got {:?})", s))?;
        Level::try_from(n)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default)]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
    /// Any further language codes, kept verbatim.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_json::Value>,
}

impl Translations {
    pub fn english(en: impl Into<String>) -> Self {
        Translations {
            en: en.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default)]
    pub translations: Translations,
}

pub fn from_json(text: &str) -> Result<Vec<VocabEntry>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Pretty-printed with two-space indent and a trailing newline; non-ASCII is written as-is.
pub fn to_json(entries: &[VocabEntry]) -> Result<String, StoreError> {
    let mut out = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;
    out.push('\n');
    Ok(out)
}

pub fn load(path: &Path) -> Result<Vec<VocabEntry>, StoreError> {
    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&text).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(path: &Path, entries: &[VocabEntry]) -> Result<(), StoreError> {
    let json = to_json(entries)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)
}

/// Sibling backup location: `topik-vocab.json` -> `topik-vocab-old.json`.
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "vocab".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{}-old.{}", stem, ext.to_string_lossy()),
        None => format!("{}-old", stem),
    };
    path.with_file_name(name)
}

pub fn backup(path: &Path) -> Result<PathBuf, StoreError> {
    let to = backup_path(path);
    fs::copy(path, &to).map_err(|source| StoreError::Backup {
        from: path.to_path_buf(),
        to: to.clone(),
        source,
    })?;
    Ok(to)
}

/// Entries whose English translation is missing or blank.
pub fn missing_english(entries: &[VocabEntry]) -> Vec<&VocabEntry> {
    entries
        .iter()
        .filter(|e| e.translations.en.trim().is_empty())
        .collect()
}

// ── Tests ──
