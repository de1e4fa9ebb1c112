//! # primer_cli - Console Front Ends
//!
//! Interactive drivers for the five `primer_core` programs, plus the
//! plumbing every binary shares: prompting, logging and exit handling.
//!
//! Each binary in `src/bin/` parses its flags with clap, installs logging,
//! runs its driver against stdin/stdout and maps any error to the
//! program's fatal-error message and exit status.

pub mod app;
pub mod logging;
pub mod programs;
pub mod prompt;

pub use app::{emit_json, finish, CommonArgs};
pub use prompt::Prompter;
