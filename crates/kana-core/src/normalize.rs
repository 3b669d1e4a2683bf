//! Romanization variant expansion.
//!
//! Three rules generate spellings considered equivalent to an input:
//!
//! 1. Long vowels: a macron vowel (ō) becomes each plain spelling (o, ou, oh, oo).
//! 2. Syllable spellings: members of a group such as shi/si or ja/zya
//!    substitute for one another.
//! 3. Double n: `nn` collapses to `n`, and `n` before a non-vowel or the end
//!    of the string doubles to `nn`.
//!
//! Each rule runs over every variant accumulated so far, so forms that need
//! two rules together are reached. Matching is exact after expansion; there
//! is no distance threshold.

use std::collections::BTreeSet;

use tracing::{debug, debug_span};

const LONG_VOWELS: &[(char, &[&str])] = &[
    ('ō', &["o", "ou", "oh", "oo"]),
    ('ū', &["u", "uu", "uh"]),
    ('ā', &["a", "aa", "ah"]),
    ('ē', &["e", "ei", "ee", "eh"]),
    ('ī', &["i", "ii", "ih"]),
];

/// Groups of interchangeable syllable spellings.
const SYLLABLE_GROUPS: &[&[&str]] = &[
    &["shi", "si"],
    &["chi", "ti"],
    &["tsu", "tu"],
    &["fu", "hu"],
    &["ji", "zi", "di"],
    &["zu", "du"],
    &["sha", "sya"],
    &["shu", "syu"],
    &["sho", "syo"],
    &["cha", "tya"],
    &["chu", "tyu"],
    &["cho", "tyo"],
    &["ja", "zya"],
    &["ju", "zyu"],
    &["jo", "zyo"],
];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Lower-case and trim.
pub fn normalize_base(input: &str) -> String {
    input.trim().to_lowercase()
}

/// All spellings equivalent to `input`, including its base form.
pub fn expand_variants(input: &str) -> BTreeSet<String> {
    let _span = debug_span!("expand_variants", input_len = input.len()).entered();

    let mut variants = BTreeSet::new();
    variants.insert(normalize_base(input));

    expand_long_vowels(&mut variants);
    expand_syllables(&mut variants);
    expand_double_n(&mut variants);

    debug!(variant_count = variants.len());
    variants
}

fn expand_long_vowels(variants: &mut BTreeSet<String>) {
    for &(macron, spellings) in LONG_VOWELS {
        let current: Vec<String> = variants
            .iter()
            .filter(|s| s.contains(macron))
            .cloned()
            .collect();
        for s in &current {
            for spelling in spellings {
                variants.insert(s.replace(macron, spelling));
            }
        }
    }
}

fn expand_syllables(variants: &mut BTreeSet<String>) {
    for group in SYLLABLE_GROUPS {
        for &from in group.iter() {
            let current: Vec<String> = variants.iter().cloned().collect();
            for s in &current {
                for &to in group.iter() {
                    if to == from {
                        continue;
                    }
                    if let Some(replaced) = replace_syllable(s, from, to) {
                        variants.insert(replaced);
                    }
                }
            }
        }
    }
}

fn expand_double_n(variants: &mut BTreeSet<String>) {
    let current: Vec<String> = variants.iter().cloned().collect();
    for s in &current {
        if s.contains("nn") {
            variants.insert(s.replace("nn", "n"));
        }
        let doubled = double_moraic_n(s);
        if doubled != *s {
            variants.insert(doubled);
        }
    }
}

/// `n` followed by a non-vowel (or nothing) becomes `nn`. The following
/// character is consumed with the match, so `nn` becomes `nnn` rather than
/// `nnnn`.
fn double_moraic_n(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != 'n' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(&next) if is_vowel(next) => out.push('n'),
            Some(&next) => {
                out.push_str("nn");
                out.push(next);
                chars.next();
            }
            None => out.push_str("nn"),
        }
    }
    out
}

/// Replace every occurrence of the syllable spelling `from` with `to`,
/// skipping occurrences that sit inside a longer group member (the `hu` in
/// `shu`). Returns `None` when nothing was replaced.
fn replace_syllable(s: &str, from: &str, to: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len() + 2);
    let mut last = 0;
    let mut replaced = false;
    for (start, _) in s.match_indices(from) {
        if is_embedded(s, start, start + from.len()) {
            continue;
        }
        out.push_str(&s[last..start]);
        out.push_str(to);
        last = start + from.len();
        replaced = true;
    }
    if !replaced {
        return None;
    }
    out.push_str(&s[last..]);
    Some(out)
}

fn is_embedded(s: &str, start: usize, end: usize) -> bool {
    let len = end - start;
    SYLLABLE_GROUPS
        .iter()
        .flat_map(|g| g.iter())
        .filter(|m| m.len() > len)
        .any(|m| {
            let earliest = start.saturating_sub(m.len() - len);
            (earliest..=start).any(|p| {
                p + m.len() >= end && s.get(p..).is_some_and(|rest| rest.starts_with(m))
            })
        })
}

/// Whole-answer check with variant normalization, for kanji and vocabulary
/// readings.
pub fn is_romanization_match<S: AsRef<str>>(input: &str, accepted: &[S]) -> bool {
    let base = normalize_base(input);
    if accepted
        .iter()
        .any(|answer| normalize_base(answer.as_ref()) == base)
    {
        return true;
    }

    let input_variants = expand_variants(input);
    accepted
        .iter()
        .any(|answer| !expand_variants(answer.as_ref()).is_disjoint(&input_variants))
}

/// Preferred display form: macrons for long vowels and Hepburn syllables.
pub fn canonical_romanization(input: &str) -> String {
    let mut canonical = normalize_base(input);
    for (plain, macron) in [("ou", "ō"), ("uu", "ū"), ("aa", "ā"), ("ei", "ē"), ("ii", "ī")] {
        canonical = canonical.replace(plain, macron);
    }
    for (variant, hepburn) in [
        ("si", "shi"),
        ("ti", "chi"),
        ("tu", "tsu"),
        ("hu", "fu"),
        ("zi", "ji"),
    ] {
        if let Some(replaced) = replace_syllable(&canonical, variant, hepburn) {
            canonical = replaced;
        }
    }
    canonical
}
