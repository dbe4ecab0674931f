//! Grade command: consensus grade level with an optional gate.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use textstat_core::{Language, TextStandard, TextStat};

use super::read_prose;

/// Arguments for the `grade` subcommand.
#[derive(Args, Debug)]
pub struct GradeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Print the bare grade number instead of a grade range.
    #[arg(long)]
    pub numeric: bool,

    /// Maximum acceptable grade level; exits non-zero above it.
    #[arg(long)]
    pub max_grade: Option<i64>,

    /// Language tag (e.g. en_us, en_gb, de). Defaults to the configured language.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Strip markdown before scoring (implied for .md files).
    #[arg(long)]
    pub markdown: bool,
}

/// Report the consensus grade of a file.
#[instrument(name = "cmd_grade", skip_all, fields(file = %args.file))]
pub fn cmd_grade(
    args: GradeArgs,
    global_json: bool,
    config_language: Language,
    config_max_grade: Option<i64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let language = args.language.map_or(config_language, Language::from);
    let max_grade = args.max_grade.or(config_max_grade);
    debug!(file = %args.file, %language, ?max_grade, "executing grade command");

    let text = read_prose(&args.file, args.markdown, max_input_bytes)?;
    let report = TextStat::new(language)
        .report(&text, max_grade)
        .with_context(|| format!("failed to grade {}", args.file))?;

    let standard = if args.numeric {
        TextStandard::Grade(report.grade as f64)
    } else {
        TextStandard::Label(report.text_standard.clone())
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.over_max {
        bail!(
            "{} reads at {} (max: {}). Shorten sentences or use simpler words.",
            args.file,
            standard,
            report.max_grade.unwrap_or_default(),
        );
    } else if let Some(max) = report.max_grade {
        println!(
            "{} {} reads at {} (max: {})",
            "PASS:".green(),
            args.file,
            standard,
            max,
        );
    } else {
        println!("{standard}");
    }

    Ok(())
}
