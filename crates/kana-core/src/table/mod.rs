//! Character tables: kana glyphs and their accepted romanizations.
//!
//! A [`CharacterTable`] holds one script. A [`Registry`] pairs the hiragana
//! and katakana tables with the [`ScriptMode`] that decides which of them a
//! lookup consults. Registries are built once and shared read-only (usually
//! behind an `Arc`); nothing here is global.

mod config;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::unicode::{hiragana_to_katakana, is_hiragana, is_katakana};

pub use config::parse_kana_toml;

pub const DEFAULT_KANA_TOML: &str = include_str!("default_kana.toml");

/// Returns the embedded default kana table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_KANA_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("kana table is empty")]
    Empty,
    #[error("duplicate glyph: {0}")]
    DuplicateGlyph(String),
    #[error("glyph must be one or two kana code points: {0:?}")]
    InvalidGlyph(String),
    #[error("no romanizations for glyph: {0}")]
    EmptyTransliterations(String),
    #[error("romanization for {glyph} must be non-empty ASCII letters: {value:?}")]
    InvalidTransliteration { glyph: String, value: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Informational grouping of a character unit. Matching ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Plain syllable (か).
    Plain,
    /// Voiced or semi-voiced syllable (が, ぱ).
    Voiced,
    /// Two-glyph combination (きゃ).
    Combo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterUnit {
    pub glyph: String,
    /// Accepted romanizations; the first is the canonical spelling.
    pub transliterations: Vec<String>,
    pub class: CharClass,
}

impl CharacterUnit {
    /// The preferred spelling, used for display.
    pub fn canonical(&self) -> &str {
        self.transliterations
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Case-insensitive exact comparison against every accepted spelling.
    pub fn accepts(&self, syllable: &str) -> bool {
        self.transliterations
            .iter()
            .any(|t| t.eq_ignore_ascii_case(syllable))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

#[derive(Debug, Clone)]
pub struct CharacterTable {
    script: Script,
    units: Vec<CharacterUnit>,
    index: HashMap<String, usize>,
}

impl CharacterTable {
    /// Build a table, rejecting duplicate glyphs and malformed entries.
    /// Romanizations are stored lower-cased.
    pub fn new(script: Script, units: Vec<CharacterUnit>) -> Result<Self, TableError> {
        if units.is_empty() {
            return Err(TableError::Empty);
        }

        let mut index = HashMap::with_capacity(units.len());
        let mut normalized = Vec::with_capacity(units.len());
        for mut unit in units {
            validate_glyph(&unit.glyph)?;
            if unit.transliterations.is_empty() {
                return Err(TableError::EmptyTransliterations(unit.glyph));
            }
            for t in unit.transliterations.iter_mut() {
                if t.is_empty() || !t.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(TableError::InvalidTransliteration {
                        glyph: unit.glyph.clone(),
                        value: t.clone(),
                    });
                }
                t.make_ascii_lowercase();
            }
            if index.insert(unit.glyph.clone(), normalized.len()).is_some() {
                return Err(TableError::DuplicateGlyph(unit.glyph));
            }
            normalized.push(unit);
        }

        Ok(Self {
            script,
            units: normalized,
            index,
        })
    }

    pub fn parse_toml(script: Script, toml_str: &str) -> Result<Self, TableError> {
        Self::new(script, parse_kana_toml(toml_str)?)
    }

    pub fn open(script: Script, path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        Self::parse_toml(script, &content)
    }

    /// The embedded hiragana table.
    pub fn builtin_hiragana() -> Result<Self, TableError> {
        Self::parse_toml(Script::Hiragana, DEFAULT_KANA_TOML)
    }

    /// Derive the katakana counterpart of a hiragana table. Romanizations and
    /// classes carry over unchanged.
    pub fn to_katakana(&self) -> Result<Self, TableError> {
        let units = self
            .units
            .iter()
            .map(|u| CharacterUnit {
                glyph: hiragana_to_katakana(&u.glyph),
                transliterations: u.transliterations.clone(),
                class: u.class,
            })
            .collect();
        Self::new(Script::Katakana, units)
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn get(&self, glyph: &str) -> Option<&CharacterUnit> {
        self.index.get(glyph).map(|&i| &self.units[i])
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.index.contains_key(glyph)
    }

    pub fn units(&self) -> &[CharacterUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

fn validate_glyph(glyph: &str) -> Result<(), TableError> {
    let count = glyph.chars().count();
    let all_kana = glyph.chars().all(|c| is_hiragana(c) || is_katakana(c));
    if !(1..=2).contains(&count) || !all_kana {
        return Err(TableError::InvalidGlyph(glyph.to_string()));
    }
    Ok(())
}

/// Which tables a [`Registry`] lookup consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    Hiragana,
    Katakana,
    /// Hiragana first, then katakana.
    #[default]
    Combined,
}

#[derive(Debug, Clone)]
pub struct Registry {
    hiragana: CharacterTable,
    katakana: CharacterTable,
    mode: ScriptMode,
}

impl Registry {
    pub fn new(hiragana: CharacterTable, katakana: CharacterTable, mode: ScriptMode) -> Self {
        Self {
            hiragana,
            katakana,
            mode,
        }
    }

    /// Registry over the embedded tables.
    pub fn builtin(mode: ScriptMode) -> Result<Self, TableError> {
        let hiragana = CharacterTable::builtin_hiragana()?;
        let katakana = hiragana.to_katakana()?;
        Ok(Self::new(hiragana, katakana, mode))
    }

    pub fn with_mode(mut self, mode: ScriptMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ScriptMode {
        self.mode
    }

    pub fn hiragana(&self) -> &CharacterTable {
        &self.hiragana
    }

    pub fn katakana(&self) -> &CharacterTable {
        &self.katakana
    }

    /// Look up a glyph in the table(s) selected by the script mode.
    pub fn lookup(&self, glyph: &str) -> Option<&CharacterUnit> {
        match self.mode {
            ScriptMode::Hiragana => self.hiragana.get(glyph),
            ScriptMode::Katakana => self.katakana.get(glyph),
            ScriptMode::Combined => self.lookup_any(glyph),
        }
    }

    /// Look up a glyph in both tables regardless of the script mode.
    pub fn lookup_any(&self, glyph: &str) -> Option<&CharacterUnit> {
        self.hiragana.get(glyph).or_else(|| self.katakana.get(glyph))
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.lookup(glyph).is_some()
    }

    pub fn contains_any(&self, glyph: &str) -> bool {
        self.lookup_any(glyph).is_some()
    }
}
