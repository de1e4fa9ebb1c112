//! Table of square, cube, ... roots for values up to 100.

use std::process::ExitCode;

use clap::Parser;
use primer_cli::{emit_json, finish, logging, programs, CommonArgs, Prompter};
use primer_core::ProgramKind;

/// Print the 2nd through (n+1)-th roots of each multiple of an increment up to 100
#[derive(Parser)]
#[command(name = "root_table")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.verbose);

    finish(ProgramKind::RootTable, run(&cli))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let table = programs::root_table::run(&mut Prompter::stdio(), cli.common.strict)?;
    if cli.common.json {
        emit_json(ProgramKind::RootTable, &table)?;
    }
    Ok(())
}
