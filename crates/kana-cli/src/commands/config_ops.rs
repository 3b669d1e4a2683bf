use std::fs;

use kana_core::table::{CharClass, CharacterTable, Script};

pub fn romaji_export() {
    print!("{}", kana_core::romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let trie = die!(kana_core::romaji::RomajiTrie::parse_toml(&content), "Error: {}");
    println!("OK: {} mappings", trie.len());
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kana_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: analysis.strategy={}, analysis.script={:?}",
        s.analysis.strategy, s.analysis.script
    );
}

pub fn table_export() {
    print!("{}", kana_core::table::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(
        CharacterTable::parse_toml(Script::Hiragana, &content),
        "Error: {}"
    );
    // The katakana table is derived from this one, so check it builds too.
    die!(table.to_katakana(), "Error deriving katakana table: {}");

    let count = |class: CharClass| table.units().iter().filter(|u| u.class == class).count();
    println!(
        "OK: {} units ({} plain, {} voiced, {} combo)",
        table.len(),
        count(CharClass::Plain),
        count(CharClass::Voiced),
        count(CharClass::Combo)
    );
}
