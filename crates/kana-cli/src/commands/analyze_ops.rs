use std::fs;

use tracing::debug;

use kana_core::settings;
use kana_core::{
    feedback_syllables, AnalysisStrategy, AnalysisSummary, AnswerAnalyzer, ScriptMode,
};

use super::print_json;
use crate::report::{format_analysis, AnalyzeReport};

pub struct AnalyzeOptions<'a> {
    pub settings_file: Option<&'a str>,
    pub strategy: Option<AnalysisStrategy>,
    pub script: Option<ScriptMode>,
    pub json: bool,
}

pub fn analyze(expected: &str, answer: &str, opts: &AnalyzeOptions<'_>) {
    if let Some(file) = opts.settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
        debug!(file, "loaded custom settings");
    }

    let mut config = settings::settings().clone();
    if let Some(strategy) = opts.strategy {
        config.analysis.strategy = strategy;
    }
    if let Some(script) = opts.script {
        config.analysis.script = script;
    }

    let analyzer = die!(
        AnswerAnalyzer::from_settings(&config),
        "Error building analyzer: {}"
    );
    let analysis = analyzer.analyze(expected, answer);

    let report = AnalyzeReport {
        expected,
        answer,
        strategy: analyzer.strategy(),
        characters: &analysis,
        summary: AnalysisSummary::from_analysis(&analysis),
        feedback: feedback_syllables(&analysis),
    };

    if opts.json {
        print_json(&report);
    } else {
        print!("{}", format_analysis(&report));
    }
}
