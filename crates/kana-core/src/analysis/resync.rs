use crate::segment::Segmenter;
use crate::table::CharacterUnit;
use crate::tokenize::tokenize;

use super::{AlignmentStrategy, AnalysisStrategy, CharacterAnalysis, ExpectedUnit};

/// Tokenizes the romaji answer and compares each token with the unit's
/// spellings exactly (case-insensitive, no variant expansion).
#[derive(Debug, Clone, Copy, Default)]
pub struct ResyncAligner;

impl AlignmentStrategy for ResyncAligner {
    fn kind(&self) -> AnalysisStrategy {
        AnalysisStrategy::TokenizedResync
    }

    fn align(
        &self,
        _segmenter: &Segmenter,
        expected: &[ExpectedUnit<'_>],
        raw_answer: &str,
    ) -> Vec<CharacterAnalysis> {
        let units: Vec<Option<&CharacterUnit>> = expected.iter().map(|e| e.unit).collect();
        let tokens = tokenize(raw_answer, &units);

        expected
            .iter()
            .zip(tokens)
            .enumerate()
            .map(|(position, (e, token))| {
                let matched = e.unit.is_some_and(|u| u.accepts(&token));
                CharacterAnalysis::new(position, e, token, matched)
            })
            .collect()
    }
}
