use tracing::{debug, debug_span};

use crate::romaji::{KanaConverter, RomajiConfigError, RomajiConverter};
use crate::segment::Segmenter;
use crate::unicode::starts_with_katakana;

use super::{AlignmentStrategy, AnalysisStrategy, CharacterAnalysis, ExpectedUnit};

/// Converts the romaji answer to kana, then compares glyph units.
///
/// `user_syllable` holds the converted kana rather than what was typed.
pub struct ConversionAligner {
    converter: Box<dyn KanaConverter>,
}

impl ConversionAligner {
    pub fn new(converter: Box<dyn KanaConverter>) -> Self {
        Self { converter }
    }

    pub fn builtin() -> Result<Self, RomajiConfigError> {
        Ok(Self::new(Box::new(RomajiConverter::builtin()?)))
    }
}

impl AlignmentStrategy for ConversionAligner {
    fn kind(&self) -> AnalysisStrategy {
        AnalysisStrategy::ConversionBased
    }

    fn align(
        &self,
        segmenter: &Segmenter,
        expected: &[ExpectedUnit<'_>],
        raw_answer: &str,
    ) -> Vec<CharacterAnalysis> {
        let answer = raw_answer.trim().to_lowercase();
        let katakana = expected.first().is_some_and(|e| starts_with_katakana(e.glyph));
        let converted = if katakana {
            self.converter.to_katakana(&answer)
        } else {
            self.converter.to_hiragana(&answer)
        };
        let user_units = segmenter.segment_any(&converted);
        debug!(converted = %converted, user_units = user_units.len(), "converted answer");

        if user_units.len() == expected.len() {
            return expected
                .iter()
                .zip(user_units)
                .enumerate()
                .map(|(position, (e, user))| {
                    let matched = user == e.glyph;
                    CharacterAnalysis::new(position, e, user, matched)
                })
                .collect();
        }

        align_units(expected, &user_units)
    }
}

/// Greedy alignment for unit sequences of different lengths.
///
/// A unit that does not start the remaining input looks ahead for the next
/// unit any later expected glyph matches and takes the gap before it. When
/// nothing ahead matches it takes the rest.
fn align_units(expected: &[ExpectedUnit<'_>], user: &[String]) -> Vec<CharacterAnalysis> {
    let _span =
        debug_span!("align_units", expected = expected.len(), actual = user.len()).entered();

    let mut cursor = 0;
    let mut result = Vec::with_capacity(expected.len());

    for (position, e) in expected.iter().enumerate() {
        if e.unit.is_none() {
            result.push(CharacterAnalysis::new(position, e, String::new(), false));
            continue;
        }

        if user.get(cursor).is_some_and(|u| u == e.glyph) {
            result.push(CharacterAnalysis::new(position, e, user[cursor].clone(), true));
            cursor += 1;
            continue;
        }

        let later = &expected[position + 1..];
        let sync = (cursor..user.len()).find(|&j| later.iter().any(|l| l.glyph == user[j]));
        let end = sync.unwrap_or(user.len());
        result.push(CharacterAnalysis::new(position, e, user[cursor..end].concat(), false));
        cursor = end;
    }

    result
}
