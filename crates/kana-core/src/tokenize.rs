//! Splitting an unsegmented romaji answer into one token per expected unit.
//!
//! The answer is consumed left to right. A unit whose accepted spelling
//! starts the remaining input takes it. Otherwise the tokenizer looks for the
//! earliest place where a later unit's spelling appears (the sync point) and
//! attributes everything before it to the current unit. Tokens exist for
//! feedback, so their concatenation may drop characters.

use tracing::{debug, debug_span};

use crate::table::CharacterUnit;

/// Longest syllable the greedy fallback tries.
const MAX_SYLLABLE_CHARS: usize = 3;

/// Romaji syllables the greedy fallback may extract.
pub const VALID_SYLLABLES: &[&str] = &[
    // Vowels
    "a", "i", "u", "e", "o",
    // Plain
    "ka", "ki", "ku", "ke", "ko",
    "sa", "si", "shi", "su", "se", "so",
    "ta", "ti", "chi", "tsu", "tu", "te", "to",
    "na", "ni", "nu", "ne", "no",
    "ha", "hi", "fu", "hu", "he", "ho",
    "ma", "mi", "mu", "me", "mo",
    "ya", "yu", "yo",
    "ra", "ri", "ru", "re", "ro",
    "wa", "wo", "n",
    // Voiced
    "ga", "gi", "gu", "ge", "go",
    "za", "zi", "ji", "zu", "ze", "zo",
    "da", "di", "du", "de", "do",
    "ba", "bi", "bu", "be", "bo",
    "pa", "pi", "pu", "pe", "po",
    // Combinations
    "kya", "kyu", "kyo",
    "sha", "sya", "shu", "syu", "sho", "syo",
    "cha", "cya", "tya", "chu", "cyu", "tyu", "cho", "cyo", "tyo",
    "nya", "nyu", "nyo",
    "hya", "hyu", "hyo",
    "mya", "myu", "myo",
    "rya", "ryu", "ryo",
    "gya", "gyu", "gyo",
    "ja", "zya", "ju", "zyu", "jo", "zyo",
    "bya", "byu", "byo",
    "pya", "pyu", "pyo",
];

pub fn is_valid_syllable(s: &str) -> bool {
    VALID_SYLLABLES.contains(&s)
}

/// Byte length of the first `n` chars of `s` (or all of `s`).
fn char_prefix_len(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// The longest whitelisted syllable (3, 2, then 1 chars) at the start of `s`.
fn greedy_syllable(s: &str) -> Option<&str> {
    (1..=MAX_SYLLABLE_CHARS).rev().find_map(|n| {
        if s.chars().count() < n {
            return None;
        }
        let candidate = &s[..char_prefix_len(s, n)];
        is_valid_syllable(candidate).then_some(candidate)
    })
}

/// Earliest byte offset in `remaining` where any spelling of any later unit
/// occurs.
fn find_sync_point(remaining: &str, later: &[Option<&CharacterUnit>]) -> Option<usize> {
    later
        .iter()
        .flatten()
        .flat_map(|unit| unit.transliterations.iter())
        .filter_map(|t| remaining.find(t.to_lowercase().as_str()))
        .min()
}

/// Split `raw_answer` into exactly one token per entry of `expected`.
///
/// `None` entries are glyphs missing from the registry: they get an empty
/// token and consume nothing.
pub fn tokenize(raw_answer: &str, expected: &[Option<&CharacterUnit>]) -> Vec<String> {
    let _span = debug_span!("tokenize", units = expected.len(), answer_len = raw_answer.len())
        .entered();

    let lowered = raw_answer.trim().to_lowercase();
    let mut remaining: &str = &lowered;
    let mut tokens = Vec::with_capacity(expected.len());

    for (index, unit) in expected.iter().enumerate() {
        let Some(unit) = unit else {
            tokens.push(String::new());
            continue;
        };

        if let Some(hit) = unit
            .transliterations
            .iter()
            .find(|t| remaining.starts_with(t.to_lowercase().as_str()))
        {
            tokens.push(hit.clone());
            remaining = &remaining[hit.len()..];
            continue;
        }

        let later = &expected[index + 1..];
        match find_sync_point(remaining, later) {
            Some(sync) if sync > 0 => {
                debug!(index, sync, "resync ahead");
                tokens.push(remaining[..sync].to_string());
                remaining = &remaining[sync..];
            }
            Some(_) => {
                // A later unit's spelling starts right here. Give it that
                // syllable unless the same syllable repeats further on.
                let greedy = greedy_syllable(remaining);
                if let Some(syllable) = greedy {
                    let repeats = remaining[syllable.len()..].contains(syllable);
                    let later_expects = later.iter().flatten().any(|u| u.accepts(syllable));
                    if !repeats && later_expects {
                        debug!(index, syllable, "deferring syllable to a later unit");
                        tokens.push(String::new());
                        continue;
                    }
                }
                let taken = greedy.unwrap_or(&remaining[..char_prefix_len(remaining, 1)]);
                tokens.push(taken.to_string());
                remaining = &remaining[taken.len()..];
            }
            None => {
                tokens.push(remaining.to_string());
                remaining = "";
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests;
