use serde::Serialize;
use tracing::debug;

use super::config::RomajiConfigError;
use super::trie::RomajiTrie;
use super::KanaConverter;

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Whole-answer romaji converter backed by a [`RomajiTrie`].
pub struct RomajiConverter {
    trie: RomajiTrie,
}

impl RomajiConverter {
    pub fn new(trie: RomajiTrie) -> Self {
        Self { trie }
    }

    pub fn builtin() -> Result<Self, RomajiConfigError> {
        RomajiTrie::builtin().map(Self::new)
    }

    pub fn trie(&self) -> &RomajiTrie {
        &self.trie
    }
}

impl KanaConverter for RomajiConverter {
    fn to_hiragana(&self, romaji: &str) -> String {
        let chars: Vec<char> = romaji.trim().to_lowercase().chars().collect();
        let mut out = String::with_capacity(chars.len() * 3);
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();
            let after = chars.get(i + 2).copied();

            // "nn" ahead of a vowel: the first n is ん, the second starts the next syllable
            if ch == 'n' && next == Some('n') && after.is_some_and(|c| is_vowel(c) || c == 'y') {
                out.push('ん');
                i += 1;
                continue;
            }

            if let Some((kana, len)) = self.trie.longest_prefix(&chars[i..]) {
                out.push_str(kana);
                i += len;
                continue;
            }

            // Sokuon: doubled consonant, or the t of "tch"
            let doubled = next == Some(ch) && ch.is_ascii_lowercase() && !is_vowel(ch) && ch != 'n';
            if doubled || (ch == 't' && next == Some('c') && after == Some('h')) {
                out.push('っ');
                i += 1;
                continue;
            }

            if ch == 'n' && next.map_or(true, |c| !is_vowel(c) && c != 'y') {
                out.push('ん');
                i += 1;
                continue;
            }

            out.push(ch);
            i += 1;
        }

        out
    }
}

/// What a conversion produced, and what it could not convert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionDiagnostics {
    pub original: String,
    pub converted: String,
    /// ASCII characters left in the output, in order of appearance.
    pub unconverted: Vec<char>,
}

impl ConversionDiagnostics {
    pub fn is_fully_converted(&self) -> bool {
        self.unconverted.is_empty()
    }
}

/// Convert `answer` to hiragana (or katakana) and report leftover ASCII.
pub fn conversion_diagnostics(
    converter: &dyn KanaConverter,
    answer: &str,
    katakana: bool,
) -> ConversionDiagnostics {
    let converted = if katakana {
        converter.to_katakana(answer)
    } else {
        converter.to_hiragana(answer)
    };
    let unconverted: Vec<char> = converted
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_whitespace())
        .collect();
    if !unconverted.is_empty() {
        debug!(answer, converted = %converted, leftover = unconverted.len(), "incomplete romaji conversion");
    }
    ConversionDiagnostics {
        original: answer.to_string(),
        converted,
        unconverted,
    }
}
