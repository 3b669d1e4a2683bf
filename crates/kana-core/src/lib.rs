//! Answer matching and analysis for kana, kanji, and vocabulary drills.
//!
//! The entry points are [`segment::Segmenter`] for splitting kana into
//! character units, [`normalize::is_romanization_match`] for whole-word
//! checks, and [`analysis::AnswerAnalyzer`] for per-character feedback on
//! multi-character answers.

pub mod analysis;
pub mod catalog;
pub mod normalize;
pub mod romaji;
pub mod segment;
pub mod settings;
pub mod table;
pub mod tokenize;
pub mod unicode;
pub mod validate;

pub use analysis::{
    feedback_syllables, AlignmentStrategy, AnalysisStrategy, AnalysisSummary, AnalyzerError,
    AnswerAnalyzer, CharacterAnalysis, ConversionAligner, ExpectedUnit, FeedbackSyllable,
    ResyncAligner,
};
pub use normalize::{canonical_romanization, expand_variants, is_romanization_match};
pub use segment::Segmenter;
pub use table::{CharClass, CharacterTable, CharacterUnit, Registry, ScriptMode};
pub use validate::{accepted_romanizations, is_answer_correct, score_percentage};
