//! Whole-answer checks and scoring.

use crate::table::CharacterUnit;

/// Kana path: trimmed, lower-cased exact membership. No variant expansion.
pub fn is_answer_correct<S: AsRef<str>>(user_answer: &str, accepted: &[S]) -> bool {
    let normalized = user_answer.trim().to_lowercase();
    accepted
        .iter()
        .any(|a| a.as_ref().to_lowercase() == normalized)
}

/// `round(100 * correct / total)`, or 0 when `total` is 0.
pub fn score_percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((correct as f64 * 100.0) / total as f64).round() as u32
}

/// Every spelling of a unit sequence: one accepted transliteration per unit,
/// first unit varying slowest. The first entry is the canonical spelling.
pub fn accepted_romanizations(units: &[&CharacterUnit]) -> Vec<String> {
    if units.is_empty() {
        return Vec::new();
    }
    units.iter().fold(vec![String::new()], |acc, &unit| {
        acc.iter()
            .flat_map(move |prefix| {
                unit.transliterations
                    .iter()
                    .map(move |t| format!("{prefix}{t}"))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CharClass, Registry, ScriptMode};

    fn unit(glyph: &str, translits: &[&str]) -> CharacterUnit {
        CharacterUnit {
            glyph: glyph.to_string(),
            transliterations: translits.iter().map(|s| s.to_string()).collect(),
            class: CharClass::Plain,
        }
    }

    #[test]
    fn exact_and_case_insensitive() {
        assert!(is_answer_correct("KA", &["ka"]));
        assert!(is_answer_correct("  ka ", &["ka"]));
        assert!(is_answer_correct("shi", &["shi", "si"]));
        assert!(is_answer_correct("si", &["shi", "si"]));
    }

    #[test]
    fn rejects_other_answers() {
        assert!(!is_answer_correct("ki", &["ka"]));
        assert!(!is_answer_correct("", &["ka"]));
        assert!(!is_answer_correct("   ", &["ka"]));
        assert!(!is_answer_correct("ka", &[] as &[&str]));
    }

    #[test]
    fn no_variant_expansion_on_kana_path() {
        // "si" is a variant of "shi" but not listed here.
        assert!(!is_answer_correct("si", &["shi"]));
        assert!(!is_answer_correct("nn", &["n"]));
    }

    #[test]
    fn percentage_rounds() {
        assert_eq!(score_percentage(3, 3), 100);
        assert_eq!(score_percentage(1, 3), 33);
        assert_eq!(score_percentage(2, 3), 67);
        assert_eq!(score_percentage(1, 8), 13);
        assert_eq!(score_percentage(0, 5), 0);
    }

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert_eq!(score_percentage(0, 0), 0);
        assert_eq!(score_percentage(4, 0), 0);
    }

    #[test]
    fn combinations_in_order() {
        let shi = unit("し", &["shi", "si"]);
        let ka = unit("か", &["ka"]);
        let tsu = unit("つ", &["tsu", "tu"]);
        assert_eq!(
            accepted_romanizations(&[&shi, &ka, &tsu]),
            vec!["shikatsu", "shikatu", "sikatsu", "sikatu"]
        );
    }

    #[test]
    fn combinations_edge_cases() {
        assert!(accepted_romanizations(&[]).is_empty());
        let n = unit("ん", &["n", "nn"]);
        assert_eq!(accepted_romanizations(&[&n]), vec!["n", "nn"]);
    }

    #[test]
    fn combinations_from_registry() {
        let registry = Registry::builtin(ScriptMode::Combined).unwrap();
        let units: Vec<&CharacterUnit> = ["じゃ", "ず"]
            .iter()
            .filter_map(|g| registry.lookup(g))
            .collect();
        let all = accepted_romanizations(&units);
        assert_eq!(all.first().map(String::as_str), Some("jazu"));
        assert!(all.contains(&"zyazu".to_string()));
        assert!(is_answer_correct("JYAZU", &all));
    }
}
