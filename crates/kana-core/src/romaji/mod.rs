//! Romaji-to-kana conversion for the conversion-based analysis strategy.
//!
//! A [`RomajiTrie`] holds the romaji → hiragana mappings in a double-array
//! trie; [`RomajiConverter`] walks a whole answer with longest-match lookups,
//! handling sokuon (っ) and hatsuon (ん) in code.

mod config;
mod convert;
mod trie;

use crate::unicode::hiragana_to_katakana;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{conversion_diagnostics, ConversionDiagnostics, RomajiConverter};
pub use trie::RomajiTrie;

pub const DEFAULT_ROMAJI_TOML: &str = include_str!("default_romaji.toml");

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_ROMAJI_TOML
}

/// Turns a typed romaji answer into kana.
///
/// Conversion is infallible: input the converter does not understand is
/// passed through unchanged so callers can report it.
pub trait KanaConverter: Send + Sync {
    fn to_hiragana(&self, romaji: &str) -> String;

    fn to_katakana(&self, romaji: &str) -> String {
        hiragana_to_katakana(&self.to_hiragana(romaji))
    }
}
