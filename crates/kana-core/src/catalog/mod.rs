//! Kanji and vocabulary entries for reading drills.
//!
//! A [`Catalog`] is loaded from TOML with `[[kanji]]` and `[[vocabulary]]`
//! arrays. Readings are lower-cased and known romanization defects are
//! repaired on load (see [`repair_romanization`]). Answers are checked
//! through the variant normalizer, unlike kana answers.

mod repair;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::is_romanization_match;
use crate::unicode::{is_hiragana, is_kanji, is_katakana};

pub use repair::repair_romanization;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("not a single kanji: {0:?}")]
    InvalidKanji(String),
    #[error("vocabulary entry has an empty word")]
    EmptyWord,
    #[error("reading for {word} must be kana: {kana:?}")]
    InvalidKana { word: String, kana: String },
    #[error("no readings for {0}")]
    EmptyReadings(String),
    #[error("reading for {entry} must be romaji (ASCII or macron vowels): {value:?}")]
    InvalidReading { entry: String, value: String },
    #[error("unknown reading mode: {0} (expected onyomi, kunyomi, or mixed)")]
    UnknownReadingMode(String),
    #[error("unknown JLPT level: {0} (expected N5..N1)")]
    UnknownLevel(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// JLPT level, ordered from easiest (N5) to hardest (N1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl fmt::Display for JlptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::N5 => "N5",
            Self::N4 => "N4",
            Self::N3 => "N3",
            Self::N2 => "N2",
            Self::N1 => "N1",
        };
        f.write_str(s)
    }
}

impl FromStr for JlptLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "N5" => Ok(Self::N5),
            "N4" => Ok(Self::N4),
            "N3" => Ok(Self::N3),
            "N2" => Ok(Self::N2),
            "N1" => Ok(Self::N1),
            _ => Err(CatalogError::UnknownLevel(s.to_string())),
        }
    }
}

/// Which kanji readings a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingMode {
    Onyomi,
    Kunyomi,
    #[default]
    Mixed,
}

impl FromStr for ReadingMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "onyomi" => Ok(Self::Onyomi),
            "kunyomi" => Ok(Self::Kunyomi),
            "mixed" => Ok(Self::Mixed),
            _ => Err(CatalogError::UnknownReadingMode(s.to_string())),
        }
    }
}

/// Whether a level filter includes the easier levels too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelScope {
    /// The requested level and every easier one.
    #[default]
    Cumulative,
    Only,
}

impl LevelScope {
    fn includes(self, requested: JlptLevel, level: JlptLevel) -> bool {
        match self {
            Self::Cumulative => level <= requested,
            Self::Only => level == requested,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiUnit {
    pub character: String,
    #[serde(default)]
    pub meanings: Vec<String>,
    /// Chinese-derived readings, romanized.
    #[serde(default)]
    pub onyomi: Vec<String>,
    /// Native Japanese readings, romanized.
    #[serde(default)]
    pub kunyomi: Vec<String>,
    pub jlpt_level: JlptLevel,
}

impl KanjiUnit {
    /// Readings accepted under `mode`; mixed is on'yomi then kun'yomi.
    pub fn accepted_readings(&self, mode: ReadingMode) -> Vec<&str> {
        let on = self.onyomi.iter().map(String::as_str);
        let kun = self.kunyomi.iter().map(String::as_str);
        match mode {
            ReadingMode::Onyomi => on.collect(),
            ReadingMode::Kunyomi => kun.collect(),
            ReadingMode::Mixed => on.chain(kun).collect(),
        }
    }

    pub fn check(&self, answer: &str, mode: ReadingMode) -> bool {
        validate_kanji_answer(answer, &self.accepted_readings(mode))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyUnit {
    /// Surface form, kanji with optional kana.
    pub word: String,
    pub kana: String,
    pub romanizations: Vec<String>,
    #[serde(default)]
    pub meaning: String,
    pub jlpt_level: JlptLevel,
}

impl VocabularyUnit {
    pub fn check(&self, answer: &str) -> bool {
        validate_vocabulary_answer(answer, &self.romanizations)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    kanji: Vec<KanjiUnit>,
    #[serde(default)]
    vocabulary: Vec<VocabularyUnit>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    kanji: Vec<KanjiUnit>,
    vocabulary: Vec<VocabularyUnit>,
    kanji_index: HashMap<String, usize>,
    vocabulary_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate entries, normalize and repair readings, and index them.
    /// Later duplicates of a surface form stay listed but lookups return the
    /// first.
    pub fn new(
        kanji: Vec<KanjiUnit>,
        vocabulary: Vec<VocabularyUnit>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for mut k in kanji {
            let mut chars = k.character.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if is_kanji(c) => {}
                _ => return Err(CatalogError::InvalidKanji(k.character)),
            }
            k.onyomi = clean_readings(&k.character, k.onyomi, false)?;
            k.kunyomi = clean_readings(&k.character, k.kunyomi, false)?;
            if k.onyomi.is_empty() && k.kunyomi.is_empty() {
                return Err(CatalogError::EmptyReadings(k.character));
            }
            let index = catalog.kanji.len();
            if catalog.kanji_index.contains_key(&k.character) {
                debug!(character = %k.character, "duplicate kanji entry");
            } else {
                catalog.kanji_index.insert(k.character.clone(), index);
            }
            catalog.kanji.push(k);
        }

        for mut v in vocabulary {
            if v.word.trim().is_empty() {
                return Err(CatalogError::EmptyWord);
            }
            let kana_ok = !v.kana.is_empty()
                && v.kana.chars().all(|c| is_hiragana(c) || is_katakana(c));
            if !kana_ok {
                return Err(CatalogError::InvalidKana {
                    word: v.word,
                    kana: v.kana,
                });
            }
            v.romanizations = clean_readings(&v.word, v.romanizations, true)?;
            if v.romanizations.is_empty() {
                return Err(CatalogError::EmptyReadings(v.word));
            }
            let index = catalog.vocabulary.len();
            if catalog.vocabulary_index.contains_key(&v.word) {
                debug!(word = %v.word, "duplicate vocabulary entry");
            } else {
                catalog.vocabulary_index.insert(v.word.clone(), index);
            }
            catalog.vocabulary.push(v);
        }

        debug!(
            kanji = catalog.kanji.len(),
            vocabulary = catalog.vocabulary.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn parse_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(toml_str).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.kanji, file.vocabulary)
    }

    pub fn open(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    pub fn kanji(&self) -> &[KanjiUnit] {
        &self.kanji
    }

    pub fn vocabulary(&self) -> &[VocabularyUnit] {
        &self.vocabulary
    }

    pub fn find_kanji(&self, character: &str) -> Option<&KanjiUnit> {
        self.kanji_index.get(character).map(|&i| &self.kanji[i])
    }

    pub fn find_vocabulary(&self, word: &str) -> Option<&VocabularyUnit> {
        self.vocabulary_index.get(word).map(|&i| &self.vocabulary[i])
    }

    pub fn kanji_by_level(&self, level: JlptLevel, scope: LevelScope) -> Vec<&KanjiUnit> {
        self.kanji
            .iter()
            .filter(|k| scope.includes(level, k.jlpt_level))
            .collect()
    }

    pub fn vocabulary_by_level(&self, level: JlptLevel, scope: LevelScope) -> Vec<&VocabularyUnit> {
        self.vocabulary
            .iter()
            .filter(|v| scope.includes(level, v.jlpt_level))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.kanji.is_empty() && self.vocabulary.is_empty()
    }
}

/// Romaji with optional macron vowels (`tō`, `kyū`).
fn is_reading_char(c: char) -> bool {
    c.is_ascii() || matches!(c, 'ā' | 'ī' | 'ū' | 'ē' | 'ō')
}

/// Lower-case, trim, optionally repair, and drop empty or repeated readings.
fn clean_readings(
    entry: &str,
    readings: Vec<String>,
    repair: bool,
) -> Result<Vec<String>, CatalogError> {
    let mut out: Vec<String> = Vec::with_capacity(readings.len());
    for raw in readings {
        let mut reading = raw.trim().to_lowercase();
        if reading.is_empty() {
            continue;
        }
        if !reading.chars().all(is_reading_char) {
            return Err(CatalogError::InvalidReading {
                entry: entry.to_string(),
                value: raw,
            });
        }
        if repair {
            let fixed = repair_romanization(&reading);
            if fixed != reading {
                debug!(entry, from = %reading, to = %fixed, "repaired romanization");
                reading = fixed;
            }
        }
        if !out.contains(&reading) {
            out.push(reading);
        }
    }
    Ok(out)
}

/// Kanji path: accepts spelling variants of any listed reading.
pub fn validate_kanji_answer<S: AsRef<str>>(answer: &str, accepted: &[S]) -> bool {
    is_romanization_match(answer, accepted)
}

/// Vocabulary path: accepts spelling variants of any listed romanization.
pub fn validate_vocabulary_answer<S: AsRef<str>>(answer: &str, accepted: &[S]) -> bool {
    is_romanization_match(answer, accepted)
}
