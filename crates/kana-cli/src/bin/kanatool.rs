use clap::{Parser, Subcommand, ValueEnum};

use kana_cli::commands::analyze_ops::{self, AnalyzeOptions};
use kana_cli::commands::{catalog_ops, config_ops, match_ops};
use kana_cli::trace_init::init_tracing;
use kana_core::catalog::ReadingMode;
use kana_core::{AnalysisStrategy, ScriptMode};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana drill answer checking and analysis")]
struct Cli {
    /// Debug logging to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScriptArg {
    Hiragana,
    Katakana,
    Combined,
}

impl From<ScriptArg> for ScriptMode {
    fn from(arg: ScriptArg) -> Self {
        match arg {
            ScriptArg::Hiragana => ScriptMode::Hiragana,
            ScriptArg::Katakana => ScriptMode::Katakana,
            ScriptArg::Combined => ScriptMode::Combined,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Onyomi,
    Kunyomi,
    Mixed,
}

impl From<ModeArg> for ReadingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Onyomi => ReadingMode::Onyomi,
            ModeArg::Kunyomi => ReadingMode::Kunyomi,
            ModeArg::Mixed => ReadingMode::Mixed,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Split kana into character units
    Segment {
        /// Kana text
        text: String,
        /// Tables to consult
        #[arg(long, value_enum, default_value = "combined")]
        script: ScriptArg,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Per-character analysis of a romaji answer
    Analyze {
        /// Expected kana
        expected: String,
        /// Romaji answer
        answer: String,
        /// Alignment strategy (tokenized-resync or conversion-based)
        #[arg(long)]
        strategy: Option<AnalysisStrategy>,
        /// Tables to consult (defaults to the settings value)
        #[arg(long, value_enum)]
        script: Option<ScriptArg>,
        /// Settings TOML file
        #[arg(long)]
        settings: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Exact whole-answer check (kana questions)
    Check {
        /// Romaji answer
        answer: String,
        /// Accepted answers
        #[arg(required = true)]
        accepted: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Whole-answer check accepting spelling variants (kanji/vocabulary)
    Match {
        /// Romaji answer
        answer: String,
        /// Accepted answers
        #[arg(required = true)]
        accepted: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the spelling variants of a romaji string
    Expand {
        /// Romaji text
        romaji: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert romaji to kana and report anything left unconverted
    Convert {
        /// Romaji text
        romaji: String,
        /// Produce katakana instead of hiragana
        #[arg(long)]
        katakana: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a kanji reading against a catalog
    Kanji {
        /// Catalog TOML file
        catalog: String,
        /// Kanji character
        kanji: String,
        /// Romaji answer
        answer: String,
        /// Readings to accept
        #[arg(long, value_enum, default_value = "mixed")]
        mode: ModeArg,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a vocabulary reading against a catalog
    Vocab {
        /// Catalog TOML file
        catalog: String,
        /// Word (kanji form)
        word: String,
        /// Romaji answer
        answer: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export or validate configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default romaji mappings as TOML
    RomajiExport,
    /// Validate a custom romaji TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default kana table as TOML
    TableExport,
    /// Validate a custom kana table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Segment { text, script, json } => match_ops::segment(&text, script.into(), json),
        Command::Analyze {
            expected,
            answer,
            strategy,
            script,
            settings,
            json,
        } => {
            let opts = AnalyzeOptions {
                settings_file: settings.as_deref(),
                strategy,
                script: script.map(Into::into),
                json,
            };
            analyze_ops::analyze(&expected, &answer, &opts);
        }
        Command::Check {
            answer,
            accepted,
            json,
        } => match_ops::check(&answer, &accepted, json),
        Command::Match {
            answer,
            accepted,
            json,
        } => match_ops::match_cmd(&answer, &accepted, json),
        Command::Expand { romaji, json } => match_ops::expand(&romaji, json),
        Command::Convert {
            romaji,
            katakana,
            json,
        } => match_ops::convert(&romaji, katakana, json),
        Command::Kanji {
            catalog,
            kanji,
            answer,
            mode,
            json,
        } => catalog_ops::kanji(&catalog, &kanji, &answer, mode.into(), json),
        Command::Vocab {
            catalog,
            word,
            answer,
            json,
        } => catalog_ops::vocab(&catalog, &word, &answer, json),
        Command::Config { action } => match action {
            ConfigAction::SettingsExport => config_ops::settings_export(),
            ConfigAction::SettingsValidate { file } => config_ops::settings_validate(&file),
            ConfigAction::RomajiExport => config_ops::romaji_export(),
            ConfigAction::RomajiValidate { file } => config_ops::romaji_validate(&file),
            ConfigAction::TableExport => config_ops::table_export(),
            ConfigAction::TableValidate { file } => config_ops::table_validate(&file),
        },
    }
}
