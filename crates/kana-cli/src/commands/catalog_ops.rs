use std::path::Path;

use serde::Serialize;

use kana_core::catalog::{Catalog, ReadingMode};

use super::print_json;

#[derive(Serialize)]
struct CatalogVerdict<'a> {
    entry: &'a str,
    answer: &'a str,
    accepted: Vec<&'a str>,
    meaning: String,
    correct: bool,
}

fn open(catalog_file: &str) -> Catalog {
    die!(
        Catalog::open(Path::new(catalog_file)),
        "Error loading catalog {catalog_file}: {}"
    )
}

pub fn kanji(catalog_file: &str, character: &str, answer: &str, mode: ReadingMode, json: bool) {
    let catalog = open(catalog_file);
    let kanji = die!(
        catalog
            .find_kanji(character)
            .ok_or_else(|| format!("{character} is not in the catalog")),
        "Error: {}"
    );

    let verdict = CatalogVerdict {
        entry: &kanji.character,
        answer,
        accepted: kanji.accepted_readings(mode),
        meaning: kanji.meanings.join(", "),
        correct: kanji.check(answer, mode),
    };
    print_verdict(&verdict, json);
}

pub fn vocab(catalog_file: &str, word: &str, answer: &str, json: bool) {
    let catalog = open(catalog_file);
    let vocab = die!(
        catalog
            .find_vocabulary(word)
            .ok_or_else(|| format!("{word} is not in the catalog")),
        "Error: {}"
    );

    let verdict = CatalogVerdict {
        entry: &vocab.word,
        answer,
        accepted: vocab.romanizations.iter().map(String::as_str).collect(),
        meaning: vocab.meaning.clone(),
        correct: vocab.check(answer),
    };
    print_verdict(&verdict, json);
}

fn print_verdict(verdict: &CatalogVerdict<'_>, json: bool) {
    if json {
        print_json(verdict);
        return;
    }
    let status = if verdict.correct { "correct" } else { "incorrect" };
    println!("{} \"{}\": {status}", verdict.entry, verdict.answer);
    if verdict.accepted.is_empty() {
        println!("  accepted: (no readings for this mode)");
    } else {
        println!("  accepted: {}", verdict.accepted.join(", "));
    }
    if !verdict.meaning.is_empty() {
        println!("  meaning:  {}", verdict.meaning);
    }
}
