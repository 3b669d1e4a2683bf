//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Hosts that prefer explicit wiring can skip the singleton and pass the
//! result of [`parse_settings_toml`] to [`crate::AnswerAnalyzer::from_settings`].

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisStrategy;
use crate::table::ScriptMode;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
///
/// Custom TOML was validated by [`init_custom`] and the default is checked by
/// the build script, so a parse failure here falls back to defaults.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        CUSTOM_TOML
            .get()
            .and_then(|s| parse_settings_toml(s).ok())
            .unwrap_or_default()
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub strategy: AnalysisStrategy,
    #[serde(default)]
    pub script: ScriptMode,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = fs::read_to_string(path)?;
    parse_settings_toml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.analysis.strategy, AnalysisStrategy::TokenizedResync);
        assert_eq!(s.analysis.script, ScriptMode::Combined);
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[analysis]
strategy = "conversion-based"
script = "katakana"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.analysis.strategy, AnalysisStrategy::ConversionBased);
        assert_eq!(s.analysis.script, ScriptMode::Katakana);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let s = parse_settings_toml("[analysis]\nscript = \"hiragana\"\n").unwrap();
        assert_eq!(s.analysis.strategy, AnalysisStrategy::TokenizedResync);
        assert_eq!(s.analysis.script, ScriptMode::Hiragana);

        let s = parse_settings_toml("").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn error_unknown_strategy() {
        let toml = "[analysis]\nstrategy = \"fuzzy\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_unknown_script() {
        let toml = "[analysis]\nscript = \"romaji\"\n";
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn error_unknown_field() {
        let toml = "[analysis]\nstrictness = 3\n";
        assert!(matches!(
            parse_settings_toml(toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[analysis]\nstrategy = \"conversion-based\"\n").unwrap();
        let s = load_settings(&path).unwrap();
        assert_eq!(s.analysis.strategy, AnalysisStrategy::ConversionBased);

        let err = load_settings(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn global_settings_default_without_custom() {
        // No test calls init_custom, so the singleton holds the defaults.
        assert_eq!(settings(), &Settings::default());
    }
}
