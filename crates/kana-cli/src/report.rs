//! Text rendering for analysis results.

use std::fmt::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use kana_core::{AnalysisStrategy, AnalysisSummary, CharacterAnalysis, FeedbackSyllable};

/// Everything `kanatool analyze` prints, in one serializable value.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport<'a> {
    pub expected: &'a str,
    pub answer: &'a str,
    pub strategy: AnalysisStrategy,
    pub characters: &'a [CharacterAnalysis],
    pub summary: AnalysisSummary,
    pub feedback: Vec<FeedbackSyllable>,
}

/// Left-align `s` to `width` terminal columns. Kana are two columns wide.
pub fn pad(s: &str, width: usize) -> String {
    let display_width = UnicodeWidthStr::width(s);
    if display_width < width {
        format!("{s}{}", " ".repeat(width - display_width))
    } else {
        s.to_string()
    }
}

/// The expected spelling with missed syllables in brackets: `[ka]tana`.
pub fn format_feedback(feedback: &[FeedbackSyllable]) -> String {
    feedback
        .iter()
        .map(|f| {
            let syllable = if f.syllable.is_empty() { "?" } else { f.syllable.as_str() };
            if f.is_wrong {
                format!("[{syllable}]")
            } else {
                syllable.to_string()
            }
        })
        .collect()
}

pub fn format_analysis(report: &AnalyzeReport<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== {} <- \"{}\" ({}) ===",
        report.expected, report.answer, report.strategy
    );

    let typed_width = report
        .characters
        .iter()
        .map(|c| UnicodeWidthStr::width(c.user_syllable.as_str()))
        .max()
        .unwrap_or(0)
        .max(5)
        + 2;

    let _ = writeln!(
        out,
        "  {:>3}  {}{}{}  accepted",
        "#",
        pad("char", 6),
        pad("typed", typed_width),
        pad("ok", 4)
    );
    for c in report.characters {
        let typed = if c.user_syllable.is_empty() {
            "-"
        } else {
            c.user_syllable.as_str()
        };
        let accepted = if c.correct_syllables.is_empty() {
            "(unknown glyph)".to_string()
        } else {
            c.correct_syllables.join(", ")
        };
        let _ = writeln!(
            out,
            "  {:>3}  {}{}{}  {}",
            c.position,
            pad(&c.character, 6),
            pad(typed, typed_width),
            pad(if c.is_correct { "yes" } else { "no" }, 4),
            accepted
        );
    }

    let s = &report.summary;
    let _ = writeln!(
        out,
        "\nscore: {}/{} ({}%){}",
        s.correct,
        s.total,
        s.percentage,
        if s.all_correct { "  all correct" } else { "" }
    );
    let _ = writeln!(out, "answer: {}", format_feedback(&report.feedback));
    out
}
