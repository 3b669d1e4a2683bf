use std::collections::BTreeMap;

use crawdad::Trie;

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::DEFAULT_ROMAJI_TOML;

/// Double-array trie from romaji keys to hiragana.
pub struct RomajiTrie {
    da: Trie,
    values: Vec<String>,
}

impl RomajiTrie {
    /// Build from the embedded default mappings.
    pub fn builtin() -> Result<Self, RomajiConfigError> {
        Self::parse_toml(DEFAULT_ROMAJI_TOML)
    }

    pub fn parse_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        let map = parse_romaji_toml(toml_str)?;
        Self::from_mappings(&map)
    }

    pub fn from_mappings(map: &BTreeMap<String, String>) -> Result<Self, RomajiConfigError> {
        let records = map.keys().enumerate().map(|(id, key)| (key.as_str(), id as u32));
        let da = Trie::from_records(records).map_err(|e| RomajiConfigError::Trie(e.to_string()))?;
        let values = map.values().cloned().collect();
        Ok(Self { da, values })
    }

    /// Exact lookup of a complete romaji key.
    pub fn lookup(&self, romaji: &str) -> Option<&str> {
        self.da
            .exact_match(romaji.chars())
            .map(|id| self.values[id as usize].as_str())
    }

    /// Longest key that is a prefix of `input`, with its length in chars.
    pub fn longest_prefix(&self, input: &[char]) -> Option<(&str, usize)> {
        self.da
            .common_prefix_search(input.iter().copied())
            .last()
            .map(|(id, len)| (self.values[id as usize].as_str(), len))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> RomajiTrie {
        RomajiTrie::builtin().unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_vowel_exact() {
        assert_eq!(trie().lookup("a"), Some("あ"));
    }

    #[test]
    fn test_prefix_only_is_not_a_match() {
        assert_eq!(trie().lookup("k"), None);
        assert_eq!(trie().lookup("sh"), None);
    }

    #[test]
    fn test_youon() {
        let t = trie();
        assert_eq!(t.lookup("sha"), Some("しゃ"));
        assert_eq!(t.lookup("sya"), Some("しゃ"));
        assert_eq!(t.lookup("jya"), Some("じゃ"));
    }

    #[test]
    fn test_symbols() {
        let t = trie();
        assert_eq!(t.lookup("-"), Some("ー"));
        assert_eq!(t.lookup("."), Some("。"));
        assert_eq!(t.lookup("n'"), Some("ん"));
    }

    #[test]
    fn test_longest_prefix_prefers_longer_key() {
        let t = trie();
        assert_eq!(t.longest_prefix(&chars("shabu")), Some(("しゃ", 3)));
        assert_eq!(t.longest_prefix(&chars("tsuki")), Some(("つ", 3)));
        assert_eq!(t.longest_prefix(&chars("ka")), Some(("か", 2)));
    }

    #[test]
    fn test_longest_prefix_none() {
        let t = trie();
        assert_eq!(t.longest_prefix(&chars("kka")), None);
        assert_eq!(t.longest_prefix(&chars("n")), None);
        assert_eq!(t.longest_prefix(&chars("")), None);
        assert_eq!(t.longest_prefix(&chars("ｋa")), None);
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let t = trie();
        let map = parse_romaji_toml(DEFAULT_ROMAJI_TOML).unwrap();
        assert_eq!(t.len(), map.len());
        for (romaji, kana) in &map {
            assert_eq!(t.lookup(romaji), Some(kana.as_str()), "romaji={romaji}");
        }
    }
}
