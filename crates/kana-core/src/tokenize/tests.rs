use proptest::prelude::*;

use super::*;
use crate::table::{Registry, ScriptMode};

fn registry() -> Registry {
    Registry::builtin(ScriptMode::Combined).unwrap()
}

fn run(reg: &Registry, glyphs: &[&str], answer: &str) -> Vec<String> {
    let units: Vec<Option<&CharacterUnit>> = glyphs.iter().map(|g| reg.lookup(g)).collect();
    tokenize(answer, &units)
}

#[test]
fn exact_answer() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た", "な"], "katana"), vec!["ka", "ta", "na"]);
}

#[test]
fn case_and_whitespace_ignored() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た", "な"], "  KaTaNa "), vec!["ka", "ta", "na"]);
}

#[test]
fn alternate_spellings() {
    let reg = registry();
    assert_eq!(run(&reg, &["し", "つ"], "situ"), vec!["si", "tu"]);
    assert_eq!(run(&reg, &["じゃ", "ふ"], "zyahu"), vec!["zya", "hu"]);
}

#[test]
fn moraic_n_before_n_row() {
    let reg = registry();
    assert_eq!(run(&reg, &["ん", "な"], "nna"), vec!["n", "na"]);
}

#[test]
fn resync_on_wrong_syllables() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た", "な"], "banana"), vec!["ba", "na", "na"]);
}

#[test]
fn extra_letter_goes_to_wrong_unit() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た", "な"], "kattana"), vec!["ka", "tta", "na"]);
}

#[test]
fn missing_letter_goes_to_wrong_unit() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た", "な"], "kaana"), vec!["ka", "a", "na"]);
}

#[test]
fn syllable_deferred_to_later_unit() {
    let reg = registry();
    // "bo" belongs to ぼ; か gets nothing rather than stealing it.
    assert_eq!(run(&reg, &["か", "ぼ"], "bo"), vec!["", "bo"]);
}

#[test]
fn no_sync_point_takes_rest() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た", "な"], "kaxyz"), vec!["ka", "xyz", ""]);
}

#[test]
fn absent_unit_consumes_nothing() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "ゐ", "な"], "kana"), vec!["ka", "", "na"]);
}

#[test]
fn empty_answer() {
    let reg = registry();
    assert_eq!(run(&reg, &["か", "た"], ""), vec!["", ""]);
    assert_eq!(run(&reg, &["か", "た"], "   "), vec!["", ""]);
}

#[test]
fn repeated_syllables() {
    let reg = registry();
    assert_eq!(run(&reg, &["な", "な", "な"], "nana"), vec!["na", "na", ""]);
}

#[test]
fn greedy_syllable_prefers_longest() {
    assert_eq!(greedy_syllable("shabu"), Some("sha"));
    assert_eq!(greedy_syllable("kxa"), None);
    assert_eq!(greedy_syllable("n"), Some("n"));
    assert_eq!(greedy_syllable("ōsaka"), None);
}

fn arb_glyphs() -> impl Strategy<Value = Vec<String>> {
    let reg = registry();
    let glyphs: Vec<String> = reg.hiragana().units().iter().map(|u| u.glyph.clone()).collect();
    prop::collection::vec(prop::sample::select(glyphs), 1..6)
}

proptest! {
    #[test]
    fn prop_one_token_per_unit(glyphs in arb_glyphs(), answer in "[a-z ]{0,20}") {
        let reg = registry();
        let refs: Vec<&str> = glyphs.iter().map(String::as_str).collect();
        let tokens = run(&reg, &refs, &answer);
        prop_assert_eq!(tokens.len(), glyphs.len());
    }

    #[test]
    fn prop_tokens_preserve_order(glyphs in arb_glyphs(), answer in "[a-z]{0,20}") {
        let reg = registry();
        let refs: Vec<&str> = glyphs.iter().map(String::as_str).collect();
        let tokens = run(&reg, &refs, &answer);
        // Tokens never overlap or reorder: together they are a prefix of the answer.
        prop_assert!(answer.starts_with(&tokens.concat()));
    }

    #[test]
    fn prop_correct_spelling_round_trips(glyphs in arb_glyphs()) {
        let reg = registry();
        let refs: Vec<&str> = glyphs.iter().map(String::as_str).collect();
        let answer: String = refs.iter().map(|g| reg.lookup(g).unwrap().canonical()).collect();
        let tokens = run(&reg, &refs, &answer);
        prop_assert_eq!(tokens.concat(), answer);
    }
}
