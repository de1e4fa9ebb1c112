//! Axis-aligned right triangle model.

use std::process::ExitCode;

use clap::Parser;
use primer_cli::{emit_json, finish, logging, programs, CommonArgs, Prompter};
use primer_core::ProgramKind;

/// Describe a right triangle, scale its legs, and describe it again
#[derive(Parser)]
#[command(name = "triangles")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.verbose);

    finish(ProgramKind::Triangle, run(&cli))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let report = programs::triangles::run(&mut Prompter::stdio(), cli.common.strict)?;
    if cli.common.json {
        emit_json(ProgramKind::Triangle, &report)?;
    }
    Ok(())
}
