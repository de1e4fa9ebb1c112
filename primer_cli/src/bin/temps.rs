//! Daily temperature sample logger.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use primer_cli::programs::temps::TempsOptions;
use primer_cli::{emit_json, finish, logging, programs, CommonArgs, Prompter};
use primer_core::programs::LatestRule;
use primer_core::ProgramKind;

/// Collect temperature samples for a day and write them, with statistics, to a file
#[derive(Parser)]
#[command(name = "temps")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output file (prompted for when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// How the last sample time is chosen: literal or chronological
    #[arg(long, env = "PRIMER_LATEST_RULE", default_value = "literal")]
    latest_rule: LatestRule,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.verbose);

    finish(ProgramKind::Temperature, run(&cli))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = TempsOptions {
        output: cli.output.clone(),
        rule: cli.latest_rule,
        strict: cli.common.strict,
    };
    tracing::info!(rule = %options.rule, "starting temperature logger");

    let summary = programs::temps::run(&mut Prompter::stdio(), &options)?;
    if cli.common.json {
        emit_json(ProgramKind::Temperature, &summary)?;
    }
    Ok(())
}
