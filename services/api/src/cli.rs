use crate::assess::{run_rulesets, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use resilience_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EU Digital Resilience Audit",
    about = "Score NIS2, DORA, and AI Act self-assessments from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answers file and print or save the result
    Score(ScoreArgs),
    /// List the shipped rule-set versions and their maxima
    Rulesets,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Rulesets => run_rulesets(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assess::OutputFormat;
    use resilience_audit::assessment::RuleSetVersion;

    #[test]
    fn score_arguments_parse() {
        let cli = Cli::try_parse_from([
            "resilience-audit-api",
            "score",
            "answers.json",
            "--ruleset",
            "v118",
            "--format",
            "csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.ruleset, Some(RuleSetVersion::V118));
                assert_eq!(args.format, OutputFormat::Csv);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_rule_set_is_rejected_by_the_parser() {
        let parsed = Cli::try_parse_from([
            "resilience-audit-api",
            "score",
            "answers.json",
            "--ruleset",
            "v2",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["resilience-audit-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }
}
