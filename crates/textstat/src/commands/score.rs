//! Score command: compute readability metrics for a file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use textstat_core::{Language, Metric, MetricValue, TextStat};

use super::read_prose;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Metric to compute (repeatable). Omit for all metrics.
    #[arg(short, long = "metric", value_enum, value_name = "METRIC")]
    pub metrics: Vec<Metric>,

    /// Language tag (e.g. en_us, en_gb, de). Defaults to the configured language.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Strip markdown before scoring (implied for .md files).
    #[arg(long)]
    pub markdown: bool,
}

#[derive(Serialize)]
struct ScoreOutput {
    file: Utf8PathBuf,
    language: Language,
    metrics: Vec<MetricScore>,
}

#[derive(Serialize)]
struct MetricScore {
    metric: Metric,
    value: MetricValue,
}

/// Compute the requested metrics for a file.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_language: Language,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let language = args.language.map_or(config_language, Language::from);
    debug!(file = %args.file, %language, metrics = ?args.metrics, "executing score command");

    let text = read_prose(&args.file, args.markdown, max_input_bytes)?;
    let metrics = if args.metrics.is_empty() {
        Metric::ALL.to_vec()
    } else {
        args.metrics
    };

    let stat = TextStat::new(language.clone());
    let scores = metrics
        .into_iter()
        .map(|metric| {
            let value = stat
                .measure(metric, &text)
                .with_context(|| format!("failed to compute {metric} for {}", args.file))?;
            Ok(MetricScore { metric, value })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if global_json {
        let output = ScoreOutput {
            file: args.file,
            language,
            metrics: scores,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if let [single] = scores.as_slice() {
        println!("{}", single.value);
    } else {
        let width = scores
            .iter()
            .map(|s| s.metric.as_str().len())
            .max()
            .unwrap_or_default();
        for score in &scores {
            let name = format!("{:width$}", score.metric.as_str());
            println!("{}  {}", name.dimmed(), score.value.bold());
        }
    }

    Ok(())
}
