use std::collections::BTreeMap;

use serde::Deserialize;

use super::{CharClass, CharacterUnit, TableError};

#[derive(Deserialize)]
struct KanaTableConfig {
    #[serde(default)]
    plain: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    voiced: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    combo: BTreeMap<String, Vec<String>>,
}

/// Parse a kana table TOML document into character units.
///
/// Sections are `[plain]`, `[voiced]` and `[combo]`; each maps a glyph to its
/// accepted romanizations. Uniqueness across sections is checked by
/// [`CharacterTable::new`](super::CharacterTable::new).
pub fn parse_kana_toml(toml_str: &str) -> Result<Vec<CharacterUnit>, TableError> {
    let config: KanaTableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    let sections = [
        (CharClass::Plain, config.plain),
        (CharClass::Voiced, config.voiced),
        (CharClass::Combo, config.combo),
    ];

    let mut units = Vec::new();
    for (class, section) in sections {
        for (glyph, transliterations) in section {
            units.push(CharacterUnit {
                glyph,
                transliterations,
                class,
            });
        }
    }

    if units.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(units)
}
