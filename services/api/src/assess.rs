use crate::infra::read_answers;
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use resilience_audit::assessment::{
    export_csv, render_text, AnswerStore, AssessmentService, RuleSetVersion, ScoringEngine,
};
use resilience_audit::config::AppConfig;
use resilience_audit::error::AppError;
use resilience_audit::telemetry;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping question ids to an option or a list of options
    pub(crate) answers: PathBuf,
    /// Rule-set version (v100, v118, v130). Defaults to APP_RULESET.
    #[arg(long)]
    pub(crate) ruleset: Option<RuleSetVersion>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Write the result to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        ruleset,
        format,
        output,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let version = ruleset.unwrap_or(config.assessment.rule_set);
    let engine = ScoringEngine::load(version)?;
    let answers = read_answers(&answers)?;
    let rendered = render(&engine, &answers, format, Utc::now())?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            info!(%version, path = %path.display(), "assessment written");
            println!("Assessment written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

pub(crate) fn render(
    engine: &ScoringEngine,
    answers: &AnswerStore,
    format: OutputFormat,
    generated_at: DateTime<Utc>,
) -> Result<String, AppError> {
    let result = engine.assess(answers);
    let rendered = match format {
        OutputFormat::Text => render_text(&result, generated_at),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Csv => export_csv(&result, answers, engine.rule_set().catalog())?,
    };
    Ok(rendered)
}

pub(crate) fn run_rulesets() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = AssessmentService::load(config.assessment.rule_set)?;

    println!("Rule sets (default {})", service.default_version());
    for summary in service.summaries() {
        println!(
            "- {} {}: {} points, {} questions",
            summary.version, summary.label, summary.max_possible, summary.questions
        );
        for area in summary.areas {
            println!("    {}: {} points, {} rules", area.title, area.maximum, area.rules);
        }
    }
    Ok(())
}
