use crate::output::OutputFormat;
use crate::shell::{run_lines, run_prompt};
use crate::table::{run_csv, CsvArgs};
use clap::{Args, Parser, Subcommand};
use name_normalizer::config::{AppConfig, PromptConfig};
use name_normalizer::error::AppError;
use name_normalizer::telemetry;
use std::io;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "normalize-name",
    about = "Trim, lowercase and underscore free-text names",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(flatten)]
    prompt: PromptArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Prompt for one line and print its normalized form (default command)
    Prompt(PromptArgs),
    /// Normalize every line read from stdin
    Lines(LinesArgs),
    /// Normalize one column of a CSV document
    Csv(CsvArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
struct PromptArgs {
    /// Skip the interactive prompt text
    #[arg(long)]
    no_prompt: bool,
    /// Output format for the normalized line
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
struct LinesArgs {
    /// Output format for normalized lines
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

/// `--no-prompt` wins over `NORMALIZER_SHOW_PROMPT`.
fn effective_prompt(config: &PromptConfig, no_prompt: bool) -> Option<&str> {
    (config.enabled && !no_prompt).then_some(config.text.as_str())
}

pub(crate) fn run() -> Result<(), AppError> {
    let Cli { prompt, command } = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = command.unwrap_or(Command::Prompt(prompt));
    debug!(?config.environment, ?command, "normalizer configured");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match command {
        Command::Prompt(PromptArgs { no_prompt, format }) => run_prompt(
            stdin.lock(),
            stdout.lock(),
            effective_prompt(&config.prompt, no_prompt),
            format,
        ),
        Command::Lines(LinesArgs { format }) => {
            let count = run_lines(stdin.lock(), stdout.lock(), format)?;
            info!(lines = count, "line batch complete");
            Ok(())
        }
        Command::Csv(args) => run_csv(&args, stdin.lock(), stdout.lock()),
    }
}
