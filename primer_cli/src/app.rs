//! Shared command-line options and process exit handling.

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use primer_core::errors::PrimerError;
use primer_core::programs::{ProgramKind, ProgramOutput};

/// Flags every binary accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Also print the result as JSON after the text output
    #[arg(long)]
    pub json: bool,

    /// Reject out-of-range input instead of computing with it
    #[arg(long)]
    pub strict: bool,
}

/// Print the JSON envelope for `result` to stdout.
pub fn emit_json<T: Serialize>(program: ProgramKind, result: &T) -> anyhow::Result<()> {
    let json = ProgramOutput::new(program, result).to_json_pretty()?;
    let mut stdout = std::io::stdout();
    writeln!(stdout)?;
    writeln!(stdout, "{}", json)?;
    Ok(())
}

/// Exit status for invalid or missing input
pub const EXIT_INPUT: u8 = 2;

/// Exit status for every other fatal error
pub const EXIT_FATAL: u8 = 1;

/// How a fatal error is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Stdout(String),
    Stderr(String),
}

/// Message and exit status for a failed run.
pub fn report_for(program: ProgramKind, error: &anyhow::Error) -> (Report, u8) {
    let Some(primer) = error.downcast_ref::<PrimerError>() else {
        return (Report::Stderr(format!("Error: {:#}", error)), EXIT_FATAL);
    };

    match primer {
        PrimerError::PartitionMismatch { list, .. } => (
            Report::Stdout(format!(
                "ERROR: Size of {list} list does not equal number of {list} integers copied"
            )),
            EXIT_FATAL,
        ),
        PrimerError::FileError { operation, path, .. } if operation == "open" => {
            (Report::Stderr(format!("ERROR: Unable to open file {}", path)), EXIT_FATAL)
        }
        PrimerError::FileLocked { path } => {
            (Report::Stderr(format!("ERROR: Unable to open file {}", path)), EXIT_FATAL)
        }
        e if e.is_input_error() => (
            Report::Stderr(format!("{}: {}", program.name(), e)),
            EXIT_INPUT,
        ),
        e => (Report::Stderr(format!("{}: {}", program.name(), e)), EXIT_FATAL),
    }
}

/// Turn a run result into the process exit code, printing any error.
pub fn finish(program: ProgramKind, result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => {
            tracing::info!(program = program.name(), "finished");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(program = program.name(), error = %error, "run failed");
            let (report, code) = report_for(program, &error);
            match report {
                Report::Stdout(message) => println!("{}", message),
                Report::Stderr(message) => eprintln!("{}", message),
            }
            ExitCode::from(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_mismatch_goes_to_stdout() {
        let error = anyhow::Error::new(PrimerError::partition_mismatch("non-negative", 3, 2));
        let (report, code) = report_for(ProgramKind::Split, &error);
        assert_eq!(
            report,
            Report::Stdout(
                "ERROR: Size of non-negative list does not equal number of non-negative integers copied".to_string()
            )
        );
        assert_eq!(code, EXIT_FATAL);
    }

    #[test]
    fn test_open_failure_names_file() {
        let error = anyhow::Error::new(PrimerError::file_error("open", "out/temps.txt", "No such file"));
        let (report, _) = report_for(ProgramKind::Temperature, &error);
        assert_eq!(report, Report::Stderr("ERROR: Unable to open file out/temps.txt".to_string()));
    }

    #[test]
    fn test_input_errors_use_input_status() {
        let error = anyhow::Error::new(PrimerError::missing_input("count"));
        let (report, code) = report_for(ProgramKind::Split, &error);
        assert_eq!(report, Report::Stderr("split: Missing required input: count".to_string()));
        assert_eq!(code, EXIT_INPUT);
    }

    #[test]
    fn test_foreign_errors_are_fatal() {
        let error = anyhow::anyhow!("boom");
        let (_, code) = report_for(ProgramKind::RootTable, &error);
        assert_eq!(code, EXIT_FATAL);
    }
}
