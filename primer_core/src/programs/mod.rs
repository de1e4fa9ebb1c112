//! # Console Programs
//!
//! One module per program. Each follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` types - Computed results (JSON-serializable)
//! - `calculate(input) -> PrimerResult<...>` - Pure computation
//! - `render*` - Fixed-width text output for the console or log file
//!
//! ## Available Programs
//!
//! - [`letter_freq`] - Vowel and consonant counter
//! - [`root_table`] - Table of square, cube, ... roots
//! - [`split`] - Negative / non-negative integer partition
//! - [`triangle`] - Axis-aligned right triangle model
//! - [`temperature`] - Daily temperature sample logger

pub mod letter_freq;
pub mod root_table;
pub mod split;
pub mod temperature;
pub mod triangle;

use serde::{Deserialize, Serialize};

use crate::errors::PrimerResult;

// Re-export commonly used types
pub use letter_freq::{LetterFreqInput, LetterTally};
pub use root_table::{RootRow, RootTable, RootTableInput};
pub use split::{Partition, SplitInput};
pub use temperature::{Clock, DailyLog, DailySummary, LatestRule, TemperatureSample};
pub use triangle::{Point, ScaleInput, Triangle, TriangleInput, TriangleReport, TriangleSnapshot};

/// Identifies one of the five programs.
///
/// Used to tag JSON output and log spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    LetterFreq,
    RootTable,
    Split,
    Triangle,
    Temperature,
}

impl ProgramKind {
    /// All programs in display order
    pub const ALL: [ProgramKind; 5] = [
        ProgramKind::LetterFreq,
        ProgramKind::RootTable,
        ProgramKind::Split,
        ProgramKind::Triangle,
        ProgramKind::Temperature,
    ];

    /// Short machine name, matching the binary name
    pub fn name(&self) -> &'static str {
        match self {
            ProgramKind::LetterFreq => "freq",
            ProgramKind::RootTable => "root_table",
            ProgramKind::Split => "split",
            ProgramKind::Triangle => "triangles",
            ProgramKind::Temperature => "temps",
        }
    }

    /// One-line description for help text
    pub fn description(&self) -> &'static str {
        match self {
            ProgramKind::LetterFreq => "Count vowels and consonants in a line of text",
            ProgramKind::RootTable => "Print a table of roots for values up to 100",
            ProgramKind::Split => "Split a list of integers into negative and non-negative lists",
            ProgramKind::Triangle => "Model an axis-aligned right triangle and scale it",
            ProgramKind::Temperature => "Log daily temperature samples to a file",
        }
    }
}

/// JSON envelope printed by the front ends after the text output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramOutput<T> {
    pub program: ProgramKind,
    pub result: T,
}

impl<T> ProgramOutput<T> {
    pub fn new(program: ProgramKind, result: T) -> Self {
        ProgramOutput { program, result }
    }
}

impl<T: Serialize> ProgramOutput<T> {
    /// Pretty-printed JSON for the envelope.
    pub fn to_json_pretty(&self) -> PrimerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
