//! Vowel and consonant counter.

use std::process::ExitCode;

use clap::Parser;
use primer_cli::{emit_json, finish, logging, programs, CommonArgs, Prompter};
use primer_core::ProgramKind;

/// Count the vowels (a, e, i, o, u, y) and consonants in a line of text
#[derive(Parser)]
#[command(name = "freq")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.verbose);

    finish(ProgramKind::LetterFreq, run(&cli))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let tally = programs::freq::run(&mut Prompter::stdio())?;
    if cli.common.json {
        emit_json(ProgramKind::LetterFreq, &tally)?;
    }
    Ok(())
}
