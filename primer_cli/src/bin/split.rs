//! Negative / non-negative integer splitter.

use std::process::ExitCode;

use clap::Parser;
use primer_cli::{emit_json, finish, logging, programs, CommonArgs, Prompter};
use primer_core::ProgramKind;

/// Split a list of integers into negative and non-negative lists
#[derive(Parser)]
#[command(name = "split")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.verbose);

    finish(ProgramKind::Split, run(&cli))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let partition = programs::split::run(&mut Prompter::stdio())?;
    if cli.common.json {
        emit_json(ProgramKind::Split, &partition)?;
    }
    Ok(())
}
