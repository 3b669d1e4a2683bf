use std::sync::Arc;

use serde::Serialize;

use kana_core::romaji::{conversion_diagnostics, RomajiConverter};
use kana_core::{
    canonical_romanization, expand_variants, is_answer_correct, is_romanization_match, Registry,
    ScriptMode, Segmenter,
};

use super::print_json;

#[derive(Serialize)]
struct SegmentEntry<'a> {
    glyph: &'a str,
    known: bool,
    romaji: Vec<String>,
}

#[derive(Serialize)]
struct Verdict<'a> {
    answer: &'a str,
    accepted: &'a [String],
    correct: bool,
}

pub fn segment(text: &str, script: ScriptMode, json: bool) {
    let registry = die!(Registry::builtin(script), "Error loading kana table: {}");
    let segmenter = Segmenter::new(Arc::new(registry));
    let units = segmenter.segment(text);
    let registry = segmenter.registry();

    if json {
        let entries: Vec<SegmentEntry<'_>> = units
            .iter()
            .map(|g| {
                let unit = registry.lookup(g);
                SegmentEntry {
                    glyph: g.as_str(),
                    known: unit.is_some(),
                    romaji: unit.map(|u| u.transliterations.clone()).unwrap_or_default(),
                }
            })
            .collect();
        print_json(&entries);
        return;
    }

    let labels: Vec<String> = units
        .iter()
        .map(|g| match registry.lookup(g) {
            Some(u) => format!("{g}({})", u.canonical()),
            None => format!("{g}(?)"),
        })
        .collect();
    println!("{}", labels.join(" | "));
}

/// Kana path: exact, case-insensitive.
pub fn check(answer: &str, accepted: &[String], json: bool) {
    let correct = is_answer_correct(answer, accepted);
    print_verdict(answer, accepted, correct, json);
}

/// Kanji/vocabulary path: spelling variants accepted.
pub fn match_cmd(answer: &str, accepted: &[String], json: bool) {
    let correct = is_romanization_match(answer, accepted);
    print_verdict(answer, accepted, correct, json);
}

fn print_verdict(answer: &str, accepted: &[String], correct: bool, json: bool) {
    if json {
        print_json(&Verdict {
            answer,
            accepted,
            correct,
        });
    } else if correct {
        println!("correct");
    } else {
        let shown: Vec<String> = accepted.iter().map(|a| canonical_romanization(a)).collect();
        println!("incorrect (expected {})", shown.join(" / "));
    }
}

pub fn expand(romaji: &str, json: bool) {
    let variants = expand_variants(romaji);
    if json {
        print_json(&variants);
        return;
    }
    println!("{} ({} variants)", canonical_romanization(romaji), variants.len());
    for v in &variants {
        println!("  {v}");
    }
}

pub fn convert(romaji: &str, katakana: bool, json: bool) {
    let converter = die!(RomajiConverter::builtin(), "Error loading romaji table: {}");
    let diag = conversion_diagnostics(&converter, romaji, katakana);
    if json {
        print_json(&diag);
        return;
    }
    println!("{} -> {}", diag.original, diag.converted);
    if !diag.is_fully_converted() {
        let leftover: String = diag.unconverted.iter().collect();
        println!("unconverted: {leftover}");
    }
}
