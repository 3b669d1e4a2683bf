use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be lowercase ASCII: {0}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("failed to build romaji trie: {0}")]
    Trie(String),
}

/// Parse TOML text into a sorted `BTreeMap<romaji, hiragana>`.
///
/// Keys are matched against lowercased answers, so uppercase or non-ASCII
/// keys could never fire and are rejected.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() || !key.is_ascii() || key.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(RomajiConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(RomajiConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config.mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
a = "あ"
kya = "きゃ"
"#;
        let map = parse_romaji_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["kya"], "きゃ");
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_romaji_toml(super::super::DEFAULT_ROMAJI_TOML).unwrap();
        assert!(map.len() > 150, "expected 150+ mappings, got {}", map.len());
        assert_eq!(map["shi"], "し");
        assert_eq!(map["n'"], "ん");
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_romaji_toml("[mappings]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "[mappings]\n\"あ\" = \"a\"\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_uppercase_key() {
        let toml = "[mappings]\nKa = \"か\"\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(k) if k == "Ka"));
    }

    #[test]
    fn error_empty_value() {
        let err = parse_romaji_toml("[mappings]\na = \"\"\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
