//! Per-character analysis of multi-character answers.
//!
//! [`AnswerAnalyzer`] segments the expected kana, looks each unit up in the
//! registry, and hands the units to an [`AlignmentStrategy`] chosen once at
//! construction:
//!
//! - [`ResyncAligner`] tokenizes the romaji answer against the expected
//!   spellings (see [`crate::tokenize`]).
//! - [`ConversionAligner`] converts the answer to kana and compares glyphs.

mod conversion;
mod resync;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::romaji::RomajiConfigError;
use crate::segment::Segmenter;
use crate::settings::{Settings, SettingsError};
use crate::table::{CharacterUnit, Registry, TableError};
use crate::validate::score_percentage;

pub use conversion::ConversionAligner;
pub use resync::ResyncAligner;

/// Which alignment strategy an analyzer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisStrategy {
    /// Split the romaji answer into syllables, resyncing on mistakes.
    #[default]
    TokenizedResync,
    /// Convert the answer to kana and align glyph units.
    ConversionBased,
}

impl AnalysisStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenizedResync => "tokenized-resync",
            Self::ConversionBased => "conversion-based",
        }
    }
}

impl fmt::Display for AnalysisStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisStrategy {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokenized-resync" => Ok(Self::TokenizedResync),
            "conversion-based" => Ok(Self::ConversionBased),
            other => Err(SettingsError::Parse(format!(
                "unknown analysis strategy {other:?} (expected tokenized-resync or conversion-based)"
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("character table: {0}")]
    Table(#[from] TableError),
    #[error("romaji table: {0}")]
    Romaji(#[from] RomajiConfigError),
}

/// Verdict for one expected character unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterAnalysis {
    pub character: String,
    /// The part of the answer attributed to this character; may be empty.
    pub user_syllable: String,
    /// Accepted spellings, empty when the glyph is not in the registry.
    pub correct_syllables: Vec<String>,
    pub is_correct: bool,
    pub position: usize,
}

impl CharacterAnalysis {
    fn new(
        position: usize,
        expected: &ExpectedUnit<'_>,
        user_syllable: String,
        matched: bool,
    ) -> Self {
        Self {
            character: expected.glyph.to_string(),
            user_syllable,
            correct_syllables: expected
                .unit
                .map(|u| u.transliterations.clone())
                .unwrap_or_default(),
            is_correct: matched && expected.unit.is_some(),
            position,
        }
    }
}

/// One segmented glyph of the expected sequence and its registry entry.
#[derive(Debug, Clone, Copy)]
pub struct ExpectedUnit<'a> {
    pub glyph: &'a str,
    /// `None` when the glyph is not registered.
    pub unit: Option<&'a CharacterUnit>,
}

/// Produces one [`CharacterAnalysis`] per expected unit.
pub trait AlignmentStrategy: Send + Sync {
    fn kind(&self) -> AnalysisStrategy;

    fn align(
        &self,
        segmenter: &Segmenter,
        expected: &[ExpectedUnit<'_>],
        raw_answer: &str,
    ) -> Vec<CharacterAnalysis>;
}

pub struct AnswerAnalyzer {
    segmenter: Segmenter,
    aligner: Box<dyn AlignmentStrategy>,
}

impl AnswerAnalyzer {
    /// Build an analyzer for `strategy`, using the embedded romaji table when
    /// the strategy needs conversion.
    pub fn new(
        registry: Arc<Registry>,
        strategy: AnalysisStrategy,
    ) -> Result<Self, AnalyzerError> {
        let aligner: Box<dyn AlignmentStrategy> = match strategy {
            AnalysisStrategy::TokenizedResync => Box::new(ResyncAligner),
            AnalysisStrategy::ConversionBased => Box::new(ConversionAligner::builtin()?),
        };
        Ok(Self::with_aligner(registry, aligner))
    }

    pub fn with_aligner(registry: Arc<Registry>, aligner: Box<dyn AlignmentStrategy>) -> Self {
        Self {
            segmenter: Segmenter::new(registry),
            aligner,
        }
    }

    /// Builtin tables, with the script mode and strategy from `settings`.
    pub fn from_settings(settings: &Settings) -> Result<Self, AnalyzerError> {
        let registry = Registry::builtin(settings.analysis.script)?;
        Self::new(Arc::new(registry), settings.analysis.strategy)
    }

    pub fn strategy(&self) -> AnalysisStrategy {
        self.aligner.kind()
    }

    pub fn registry(&self) -> &Registry {
        self.segmenter.registry()
    }

    pub fn segmenter(&self) -> &Segmenter {
        &self.segmenter
    }

    /// Per-character verdicts for `raw_answer` against the kana in `expected`.
    ///
    /// Never fails: unknown glyphs come back as incorrect entries with no
    /// accepted spellings.
    pub fn analyze(&self, expected: &str, raw_answer: &str) -> Vec<CharacterAnalysis> {
        let _span = debug_span!(
            "analyze",
            strategy = %self.aligner.kind(),
            answer_len = raw_answer.len()
        )
        .entered();

        let registry = self.segmenter.registry();
        let glyphs = self.segmenter.segment(expected.trim());
        let units: Vec<ExpectedUnit<'_>> = glyphs
            .iter()
            .map(|glyph| ExpectedUnit {
                glyph: glyph.as_str(),
                unit: registry.lookup(glyph),
            })
            .collect();

        let analysis = self.aligner.align(&self.segmenter, &units, raw_answer);
        debug!(
            units = analysis.len(),
            correct = analysis.iter().filter(|a| a.is_correct).count(),
            "analysis complete"
        );
        analysis
    }
}

/// Aggregate counts over one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// `round(100 * correct / total)`, 0 when there is nothing to score.
    pub percentage: u32,
    pub all_correct: bool,
}

impl AnalysisSummary {
    pub fn from_analysis(analysis: &[CharacterAnalysis]) -> Self {
        let total = analysis.len();
        let correct = analysis.iter().filter(|a| a.is_correct).count();
        Self {
            total,
            correct,
            incorrect: total - correct,
            percentage: score_percentage(correct, total),
            all_correct: total > 0 && correct == total,
        }
    }
}

/// Display form of an analysis: the preferred spelling per position and
/// whether the user missed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackSyllable {
    pub syllable: String,
    pub is_wrong: bool,
}

pub fn feedback_syllables(analysis: &[CharacterAnalysis]) -> Vec<FeedbackSyllable> {
    analysis
        .iter()
        .map(|a| FeedbackSyllable {
            syllable: a.correct_syllables.first().cloned().unwrap_or_default(),
            is_wrong: !a.is_correct,
        })
        .collect()
}
